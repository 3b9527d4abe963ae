// ABOUTME: Event handling for keyboard input and app actions

use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;
use tracing::{info, warn};

use crate::app::state::{AppState, CopyOutcome, Entry};
use crate::clipboard::ClipboardSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    NextEntry,
    PreviousEntry,
    FirstEntry,
    LastEntry,
    JumpToStep(u8),
    /// Toggle step completion, or advance the resources accordion
    Activate,
    NextTab,
    NextSnippet,
    PreviousSnippet,
    CopySnippet,
    ResetProgress,
    ToggleHelp,
}

pub struct EventHandler;

impl EventHandler {
    /// Translate a key press into an app event
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Help overlay swallows everything except close/quit keys
        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('q') => Some(AppEvent::Quit),
                KeyCode::Esc | KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::PreviousEntry),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::NextEntry),
            KeyCode::Char('g') => Some(AppEvent::FirstEntry),
            KeyCode::Char('G') => Some(AppEvent::LastEntry),
            KeyCode::Char(c @ '1'..='9') => {
                Some(AppEvent::JumpToStep(c as u8 - b'0'))
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(AppEvent::Activate),
            KeyCode::Tab => Some(AppEvent::NextTab),
            KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::NextSnippet),
            KeyCode::Left | KeyCode::Char('h') => Some(AppEvent::PreviousSnippet),
            KeyCode::Char('c') | KeyCode::Char('y') => Some(AppEvent::CopySnippet),
            KeyCode::Char('r') => Some(AppEvent::ResetProgress),
            _ => None,
        }
    }

    /// Apply an event to the state. The clipboard is the only side effect.
    pub fn process_event(
        event: AppEvent,
        state: &mut AppState,
        clipboard: &mut dyn ClipboardSink,
    ) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::NextEntry => state.select_next(),
            AppEvent::PreviousEntry => state.select_previous(),
            AppEvent::FirstEntry => state.select_first(),
            AppEvent::LastEntry => state.select_last(),
            AppEvent::JumpToStep(number) => state.jump_to_step(number),
            AppEvent::Activate => {
                state.activate_selected();
                if let Entry::Step(id) = state.selected() {
                    info!(step = %id, completed = state.progress.is_completed(id), "toggled step");
                }
            }
            AppEvent::NextTab => state.next_tab(),
            AppEvent::NextSnippet => state.select_next_snippet(),
            AppEvent::PreviousSnippet => state.select_previous_snippet(),
            AppEvent::CopySnippet => Self::copy_selected_snippet(state, clipboard),
            AppEvent::ResetProgress => state.progress.reset(),
            AppEvent::ToggleHelp => state.toggle_help(),
        }
    }

    fn copy_selected_snippet(state: &mut AppState, clipboard: &mut dyn ClipboardSink) {
        let Some(snippet) = state.current_snippet() else {
            return;
        };
        let now = Instant::now();
        match clipboard.set_text(snippet.command) {
            Ok(()) => {
                info!(snippet = snippet.id, "copied snippet to clipboard");
                state.begin_copy_flash(snippet.id, CopyOutcome::Copied, now);
            }
            Err(e) => {
                warn!(snippet = snippet.id, error = %e, "clipboard write failed");
                state.begin_copy_flash(snippet.id, CopyOutcome::Failed, now);
            }
        }
    }
}
