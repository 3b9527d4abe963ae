// ABOUTME: Help overlay listing keyboard shortcuts

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::{CORNFLOWER_BLUE, GOLD, MUTED_GRAY, PANEL_BG, SOFT_WHITE};

const BINDINGS: &[(&str, &str)] = &[
    ("↑/k, ↓/j", "Select step"),
    ("1-5", "Jump to step"),
    ("g / G", "First / last entry"),
    ("Enter, Space", "Mark step complete / expand resource"),
    ("Tab", "Switch Dashboard/CLI tab"),
    ("←/h, →/l", "Select snippet"),
    ("c, y", "Copy selected snippet"),
    ("r", "Reset progress"),
    ("?", "Toggle this help"),
    ("q, Esc", "Quit"),
];

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = Self::centered_rect(50, 60, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Keyboard Shortcuts ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let mut lines = vec![Line::from("")];
        for (keys, action) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<14}"), Style::default().fg(GOLD)),
                Span::styled(*action, Style::default().fg(SOFT_WHITE)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(MUTED_GRAY),
        )));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
        frame.render_widget(paragraph, inner);
    }

    fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical[1]);

        horizontal[1]
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
