// ABOUTME: Sidebar listing the guide steps with completion badges

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use super::{CORNFLOWER_BLUE, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE};
use crate::app::AppState;
use crate::guide::{self, StepStatus};

pub struct StepListComponent;

impl StepListComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Steps ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut items: Vec<ListItem> = Vec::new();

        for (idx, step) in guide::steps().iter().enumerate() {
            let is_selected = idx == state.selected_entry;

            let (icon, icon_style) = match state.progress.status(step.id) {
                StepStatus::Completed => ("✓", Style::default().fg(SELECTION_GREEN)),
                StepStatus::Pending => ("○", Style::default().fg(MUTED_GRAY)),
            };

            let title_style = if is_selected {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(SOFT_WHITE)
            };

            let bg_style = if is_selected {
                Style::default().bg(Color::Rgb(40, 40, 60))
            } else {
                Style::default()
            };

            items.push(
                ListItem::new(Line::from(vec![
                    Span::styled(if is_selected { "▶ " } else { "  " }, Style::default().fg(GOLD)),
                    Span::styled(icon, icon_style),
                    Span::styled(format!(" {}. ", step.id), Style::default().fg(MUTED_GRAY)),
                    Span::styled(step.title, title_style),
                ]))
                .style(bg_style),
            );
        }

        // Resources entry sits below the steps
        let resources_idx = guide::steps().len();
        let is_selected = state.selected_entry == resources_idx;
        let bg_style = if is_selected {
            Style::default().bg(Color::Rgb(40, 40, 60))
        } else {
            Style::default()
        };
        items.push(
            ListItem::new(Line::from(vec![
                Span::styled(if is_selected { "▶ " } else { "  " }, Style::default().fg(GOLD)),
                Span::styled("≡ ", Style::default().fg(CORNFLOWER_BLUE)),
                Span::styled(
                    "Additional Resources",
                    if is_selected {
                        Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(SOFT_WHITE)
                    },
                ),
            ]))
            .style(bg_style),
        );

        let list = List::new(items).style(Style::default().bg(PANEL_BG));
        frame.render_widget(list, inner);
    }
}

impl Default for StepListComponent {
    fn default() -> Self {
        Self::new()
    }
}
