// ABOUTME: Header with guide title, progress readout, and segmented progress bar

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{CORNFLOWER_BLUE, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SUBDUED_BORDER};
use crate::app::AppState;
use crate::guide;

pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Progress readout
                Constraint::Length(1), // Segmented bar
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("🚀 ", Style::default()),
            Span::styled(
                "Deploy Next.js to Vercel",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  —  Complete Guide", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, layout[0]);

        let readout = Paragraph::new(Line::from(vec![
            Span::styled("✔ ", Style::default().fg(SELECTION_GREEN)),
            Span::styled("Your Progress: ", Style::default().fg(MUTED_GRAY)),
            Span::styled(state.progress.summary(), Style::default().fg(GOLD)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(readout, layout[1]);

        self.render_progress_bar(frame, layout[2], state);
    }

    /// One filled segment per completed step, in step order
    fn render_progress_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans = Vec::new();
        for step in guide::steps() {
            let style = if state.progress.is_completed(step.id) {
                Style::default().fg(SELECTION_GREEN)
            } else {
                Style::default().fg(SUBDUED_BORDER)
            };
            spans.push(Span::styled("━━━━━━", style));
            spans.push(Span::raw(" "));
        }

        let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(bar, area);
    }
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}
