// ABOUTME: Top-level layout: header, sidebar plus detail pane, footer, help overlay

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{
    HeaderComponent, HelpComponent, ResourcesComponent, StepDetailComponent, StepListComponent,
    DARK_BG, GOLD, MUTED_GRAY,
};
use crate::app::state::{AppState, Entry};

pub struct LayoutComponent {
    header: HeaderComponent,
    step_list: StepListComponent,
    step_detail: StepDetailComponent,
    resources: ResourcesComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            header: HeaderComponent::new(),
            step_list: StepListComponent::new(),
            step_detail: StepDetailComponent::new(),
            resources: ResourcesComponent::new(),
            help: HelpComponent::new(),
        }
    }

    /// Render the whole UI from the state. Pure: the same state always
    /// produces the same frame.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();

        let container = Block::default().style(Style::default().bg(DARK_BG));
        frame.render_widget(container, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header with progress
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Footer key hints
            ])
            .split(area);

        self.header.render(frame, layout[0], state);
        self.render_body(frame, layout[1], state);
        self.render_footer(frame, layout[2], state);

        if state.help_visible {
            self.help.render(frame, area);
        }
    }

    fn render_body(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(34), // Step list sidebar
                Constraint::Min(40),    // Detail pane
            ])
            .split(area);

        self.step_list.render(frame, body[0], state);
        match state.selected() {
            Entry::Step(_) => self.step_detail.render(frame, body[1], state),
            Entry::Resources => self.resources.render(frame, body[1], state),
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans = vec![
            Span::styled(" ↑/↓", Style::default().fg(GOLD)),
            Span::styled(" select  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("Enter", Style::default().fg(GOLD)),
            Span::styled(" toggle  ", Style::default().fg(MUTED_GRAY)),
        ];
        if state
            .selected_step()
            .is_some_and(|step| step.tab_count() > 1)
        {
            spans.push(Span::styled("Tab", Style::default().fg(GOLD)));
            spans.push(Span::styled(" tabs  ", Style::default().fg(MUTED_GRAY)));
        }
        spans.extend([
            Span::styled("←/→", Style::default().fg(GOLD)),
            Span::styled(" snippet  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("c", Style::default().fg(GOLD)),
            Span::styled(" copy  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("?", Style::default().fg(GOLD)),
            Span::styled(" help  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("q", Style::default().fg(GOLD)),
            Span::styled(" quit", Style::default().fg(MUTED_GRAY)),
        ]);

        let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
        frame.render_widget(footer, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
