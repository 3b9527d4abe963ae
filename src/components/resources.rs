// ABOUTME: Resources panel with an expandable topic accordion

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::{CORNFLOWER_BLUE, GOLD, MUTED_GRAY, PANEL_BG, SOFT_WHITE, SUBDUED_BORDER};
use crate::app::AppState;
use crate::guide::{FOOTER_LINKS, RESOURCE_TOPICS};

pub struct ResourcesComponent;

impl ResourcesComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Additional Resources ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        lines.push(Line::from(Span::styled(
            "Learn more about Next.js and Vercel",
            Style::default().fg(MUTED_GRAY),
        )));
        lines.push(Line::from(""));

        for (idx, topic) in RESOURCE_TOPICS.iter().enumerate() {
            let expanded = state.expanded_resource == Some(idx);
            let chevron = if expanded { "▼" } else { "▶" };

            lines.push(Line::from(vec![
                Span::styled(format!("{chevron} "), Style::default().fg(GOLD)),
                Span::styled(
                    topic.title,
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                ),
            ]));

            if expanded {
                lines.push(Line::from(vec![
                    Span::styled("   ", Style::default()),
                    Span::styled(topic.body, Style::default().fg(MUTED_GRAY)),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("   → ", Style::default().fg(CORNFLOWER_BLUE)),
                    Span::styled(topic.link.label, Style::default().fg(SOFT_WHITE)),
                    Span::styled(
                        format!(" ({})", topic.link.url),
                        Style::default().fg(MUTED_GRAY),
                    ),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "──────────────────────────────",
            Style::default().fg(SUBDUED_BORDER),
        )));
        lines.push(Line::from(Span::styled(
            "Ready to Deploy?",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )));
        for link in FOOTER_LINKS {
            lines.push(Line::from(vec![
                Span::styled("  → ", Style::default().fg(CORNFLOWER_BLUE)),
                Span::styled(link.label, Style::default().fg(SOFT_WHITE)),
                Span::styled(format!(" ({})", link.url), Style::default().fg(MUTED_GRAY)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(GOLD)),
            Span::styled("expand next topic", Style::default().fg(MUTED_GRAY)),
        ]));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }
}

impl Default for ResourcesComponent {
    fn default() -> Self {
        Self::new()
    }
}
