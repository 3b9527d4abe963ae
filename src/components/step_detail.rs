// ABOUTME: Detail pane rendering the selected step's content blocks

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::{
    CORNFLOWER_BLUE, DARK_BG, ERROR_RED, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
    SUBDUED_BORDER,
};
use crate::app::state::{AppState, SnippetStatus};
use crate::guide::{ContentBlock, Snippet, StepStatus};

pub struct StepDetailComponent;

impl StepDetailComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(step) = state.selected_step() else {
            return;
        };

        let completed = state.progress.status(step.id) == StepStatus::Completed;
        let border_color = if completed {
            SELECTION_GREEN
        } else {
            CORNFLOWER_BLUE
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" Step {}: {} ", step.id, step.title))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();

        // Status badge and description
        let badge = match state.progress.status(step.id) {
            StepStatus::Completed => Span::styled("✓ Done", Style::default().fg(SELECTION_GREEN)),
            StepStatus::Pending => Span::styled("○ Pending", Style::default().fg(MUTED_GRAY)),
        };
        lines.push(Line::from(vec![
            badge,
            Span::styled("   ", Style::default()),
            Span::styled(step.description, Style::default().fg(MUTED_GRAY)),
        ]));
        lines.push(Line::from(""));

        self.push_blocks(&mut lines, step.blocks, state);

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(GOLD)),
            Span::styled(
                if completed {
                    "mark as not completed"
                } else {
                    "mark as completed"
                },
                Style::default().fg(MUTED_GRAY),
            ),
        ]));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn push_blocks(
        &self,
        lines: &mut Vec<Line<'static>>,
        blocks: &'static [ContentBlock],
        state: &AppState,
    ) {
        for block in blocks {
            match block {
                ContentBlock::Paragraph(text) => {
                    lines.push(Line::from(Span::styled(
                        *text,
                        Style::default().fg(SOFT_WHITE),
                    )));
                    lines.push(Line::from(""));
                }
                ContentBlock::Snippet(snippet) => {
                    self.push_snippet(lines, snippet, state);
                    lines.push(Line::from(""));
                }
                ContentBlock::Note {
                    title,
                    body,
                    bullets,
                } => {
                    lines.push(Line::from(Span::styled(
                        *title,
                        Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                    )));
                    for paragraph in *body {
                        lines.push(Line::from(Span::styled(
                            *paragraph,
                            Style::default().fg(MUTED_GRAY),
                        )));
                    }
                    for bullet in *bullets {
                        lines.push(Line::from(vec![
                            Span::styled("  • ", Style::default().fg(GOLD)),
                            Span::styled(*bullet, Style::default().fg(MUTED_GRAY)),
                        ]));
                    }
                    lines.push(Line::from(""));
                }
                ContentBlock::Numbered(entries) => {
                    for (idx, entry) in entries.iter().enumerate() {
                        lines.push(Line::from(vec![
                            Span::styled(
                                format!("  {}. ", idx + 1),
                                Style::default().fg(GOLD),
                            ),
                            Span::styled(
                                entry.title,
                                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                            ),
                        ]));
                        lines.push(Line::from(vec![
                            Span::styled("     ", Style::default()),
                            Span::styled(entry.body, Style::default().fg(MUTED_GRAY)),
                        ]));
                    }
                    lines.push(Line::from(""));
                }
                ContentBlock::Cards(cards) => {
                    for card in *cards {
                        lines.push(Line::from(vec![
                            Span::styled("  ▪ ", Style::default().fg(CORNFLOWER_BLUE)),
                            Span::styled(
                                card.title,
                                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(": ", Style::default().fg(MUTED_GRAY)),
                            Span::styled(card.body, Style::default().fg(MUTED_GRAY)),
                        ]));
                    }
                    lines.push(Line::from(""));
                }
                ContentBlock::Tabs(tabs) => {
                    let active = state.active_tab();
                    let mut tab_spans = Vec::new();
                    for (idx, tab) in tabs.iter().enumerate() {
                        let style = if idx == active {
                            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(MUTED_GRAY)
                        };
                        tab_spans.push(Span::styled(format!(" {} ", tab.label), style));
                        if idx + 1 < tabs.len() {
                            tab_spans.push(Span::styled("│", Style::default().fg(SUBDUED_BORDER)));
                        }
                    }
                    tab_spans.push(Span::styled(
                        "   [Tab] switch",
                        Style::default().fg(SUBDUED_BORDER),
                    ));
                    lines.push(Line::from(tab_spans));
                    lines.push(Line::from(Span::styled(
                        "  ────────────────────────────",
                        Style::default().fg(SUBDUED_BORDER),
                    )));
                    if let Some(tab) = tabs.get(active) {
                        self.push_blocks(lines, tab.blocks, state);
                    }
                }
                ContentBlock::Links(links) => {
                    for link in *links {
                        lines.push(Line::from(vec![
                            Span::styled("  → ", Style::default().fg(CORNFLOWER_BLUE)),
                            Span::styled(link.label, Style::default().fg(SOFT_WHITE)),
                            Span::styled(
                                format!(" ({})", link.url),
                                Style::default().fg(MUTED_GRAY),
                            ),
                        ]));
                    }
                    lines.push(Line::from(""));
                }
            }
        }
    }

    fn push_snippet(
        &self,
        lines: &mut Vec<Line<'static>>,
        snippet: &'static Snippet,
        state: &AppState,
    ) {
        let is_selected = state
            .current_snippet()
            .is_some_and(|current| current.id == snippet.id);

        let marker = if is_selected { "▶ " } else { "  " };
        let indicator = match state.snippet_status(snippet.id) {
            SnippetStatus::JustCopied => Span::styled("✓ copied", Style::default().fg(SELECTION_GREEN)),
            SnippetStatus::CopyFailed => {
                Span::styled("✗ clipboard unavailable", Style::default().fg(ERROR_RED))
            }
            SnippetStatus::Idle => {
                if is_selected {
                    Span::styled("[c] copy", Style::default().fg(MUTED_GRAY))
                } else {
                    Span::styled("", Style::default())
                }
            }
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(GOLD)),
            Span::styled("╭─ ", Style::default().fg(SUBDUED_BORDER)),
            indicator,
        ]));
        for command_line in snippet.command.lines() {
            lines.push(Line::from(vec![
                Span::styled("  │ ", Style::default().fg(SUBDUED_BORDER)),
                Span::styled("$ ", Style::default().fg(SELECTION_GREEN)),
                Span::styled(
                    command_line,
                    Style::default().fg(SOFT_WHITE).bg(DARK_BG),
                ),
            ]));
        }
        lines.push(Line::from(Span::styled(
            "  ╰─",
            Style::default().fg(SUBDUED_BORDER),
        )));
    }
}

impl Default for StepDetailComponent {
    fn default() -> Self {
        Self::new()
    }
}
