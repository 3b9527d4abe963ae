// ABOUTME: Tests for key event translation and event processing

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use shipmate::app::events::{AppEvent, EventHandler};
use shipmate::app::state::{AppState, Entry, SnippetStatus};
use shipmate::clipboard::{ClipboardError, ClipboardSink};
use shipmate::guide::StepId;

/// Clipboard double that records writes and can be told to fail
#[derive(Default)]
struct FakeClipboard {
    written: Vec<String>,
    fail: bool,
}

impl ClipboardSink for FakeClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("no display server".into()));
        }
        self.written.push(text.to_string());
        Ok(())
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_navigation_key_bindings() {
    let state = AppState::new();
    let cases = [
        (KeyCode::Up, AppEvent::PreviousEntry),
        (KeyCode::Char('k'), AppEvent::PreviousEntry),
        (KeyCode::Down, AppEvent::NextEntry),
        (KeyCode::Char('j'), AppEvent::NextEntry),
        (KeyCode::Char('g'), AppEvent::FirstEntry),
        (KeyCode::Char('G'), AppEvent::LastEntry),
        (KeyCode::Char('3'), AppEvent::JumpToStep(3)),
        (KeyCode::Enter, AppEvent::Activate),
        (KeyCode::Char(' '), AppEvent::Activate),
        (KeyCode::Tab, AppEvent::NextTab),
        (KeyCode::Right, AppEvent::NextSnippet),
        (KeyCode::Char('l'), AppEvent::NextSnippet),
        (KeyCode::Left, AppEvent::PreviousSnippet),
        (KeyCode::Char('h'), AppEvent::PreviousSnippet),
        (KeyCode::Char('c'), AppEvent::CopySnippet),
        (KeyCode::Char('y'), AppEvent::CopySnippet),
        (KeyCode::Char('r'), AppEvent::ResetProgress),
        (KeyCode::Char('?'), AppEvent::ToggleHelp),
        (KeyCode::Char('q'), AppEvent::Quit),
        (KeyCode::Esc, AppEvent::Quit),
    ];
    for (code, expected) in cases {
        assert_eq!(
            EventHandler::handle_key_event(key(code), &state),
            Some(expected),
            "binding for {code:?}"
        );
    }
}

#[test]
fn test_unbound_keys_are_ignored() {
    let state = AppState::new();
    for code in [KeyCode::Char('x'), KeyCode::F(1), KeyCode::Backspace] {
        assert_eq!(EventHandler::handle_key_event(key(code), &state), None);
    }
}

#[test]
fn test_help_overlay_swallows_input() {
    let mut state = AppState::new();
    state.toggle_help();

    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Down), &state),
        None
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('c')), &state),
        None
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Esc), &state),
        Some(AppEvent::ToggleHelp)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('q')), &state),
        Some(AppEvent::Quit)
    );
}

#[test]
fn test_copy_writes_command_and_flashes() {
    let mut state = AppState::new();
    let mut clipboard = FakeClipboard::default();

    EventHandler::process_event(AppEvent::CopySnippet, &mut state, &mut clipboard);

    assert_eq!(
        clipboard.written,
        vec!["npx create-next-app@latest my-app".to_string()]
    );
    assert_eq!(state.snippet_status("create-app"), SnippetStatus::JustCopied);
}

#[test]
fn test_failed_copy_is_surfaced_not_swallowed() {
    let mut state = AppState::new();
    let mut clipboard = FakeClipboard {
        fail: true,
        ..Default::default()
    };

    EventHandler::process_event(AppEvent::CopySnippet, &mut state, &mut clipboard);

    assert!(clipboard.written.is_empty());
    assert_eq!(state.snippet_status("create-app"), SnippetStatus::CopyFailed);
}

#[test]
fn test_copy_on_snippetless_view_is_a_no_op() {
    let mut state = AppState::new();
    let mut clipboard = FakeClipboard::default();

    // Step 3's dashboard tab has no snippets
    state.jump_to_step(3);
    EventHandler::process_event(AppEvent::CopySnippet, &mut state, &mut clipboard);
    assert!(clipboard.written.is_empty());
    assert!(state.copy_flash.is_none());

    // Neither does the resources panel
    state.select_last();
    EventHandler::process_event(AppEvent::CopySnippet, &mut state, &mut clipboard);
    assert!(clipboard.written.is_empty());
}

#[test]
fn test_activate_then_reset_round_trip() {
    let mut state = AppState::new();
    let mut clipboard = FakeClipboard::default();

    EventHandler::process_event(AppEvent::JumpToStep(2), &mut state, &mut clipboard);
    EventHandler::process_event(AppEvent::Activate, &mut state, &mut clipboard);
    EventHandler::process_event(AppEvent::JumpToStep(5), &mut state, &mut clipboard);
    EventHandler::process_event(AppEvent::Activate, &mut state, &mut clipboard);
    assert_eq!(state.progress.completed_count(), 2);
    assert!(state.progress.is_completed(StepId(2)));

    EventHandler::process_event(AppEvent::ResetProgress, &mut state, &mut clipboard);
    assert_eq!(state.progress.completed_count(), 0);
}

#[test]
fn test_quit_sets_flag() {
    let mut state = AppState::new();
    let mut clipboard = FakeClipboard::default();
    EventHandler::process_event(AppEvent::Quit, &mut state, &mut clipboard);
    assert!(state.should_quit);
}

#[test]
fn test_last_entry_is_resources() {
    let mut state = AppState::new();
    let mut clipboard = FakeClipboard::default();
    EventHandler::process_event(AppEvent::LastEntry, &mut state, &mut clipboard);
    assert_eq!(state.selected(), Entry::Resources);
}
