// ABOUTME: Headless UI tests rendering the full layout into a TestBackend

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use shipmate::app::events::EventHandler;
use shipmate::app::state::{AppState, CopyOutcome};
use shipmate::clipboard::{ClipboardError, ClipboardSink};
use shipmate::components::LayoutComponent;

struct NullClipboard;

impl ClipboardSink for NullClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

struct UiHarness {
    state: AppState,
    terminal: Terminal<TestBackend>,
    layout: LayoutComponent,
    clipboard: NullClipboard,
}

impl UiHarness {
    fn new() -> Self {
        let backend = TestBackend::new(120, 40);
        let terminal = Terminal::new(backend).unwrap();
        Self {
            state: AppState::new(),
            terminal,
            layout: LayoutComponent::new(),
            clipboard: NullClipboard,
        }
    }

    fn press(&mut self, code: KeyCode) {
        let event = KeyEvent::new(code, KeyModifiers::NONE);
        if let Some(app_event) = EventHandler::handle_key_event(event, &self.state) {
            EventHandler::process_event(app_event, &mut self.state, &mut self.clipboard);
        }
    }

    /// Render the current state and return the buffer text for inspection
    fn render(&mut self) -> String {
        let layout = &self.layout;
        let state = &self.state;
        self.terminal
            .draw(|frame| layout.render(frame, state))
            .unwrap();
        let buffer = self.terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect::<String>()
    }
}

#[test]
fn test_initial_screen_shows_title_and_empty_progress() {
    let mut harness = UiHarness::new();
    let screen = harness.render();

    assert!(screen.contains("Deploy Next.js to Vercel"));
    assert!(screen.contains("0 of 5 steps completed"));
    assert!(screen.contains("Create Your Next.js Project"));
    assert!(screen.contains("Additional Resources"));
}

#[test]
fn test_toggling_a_step_updates_header_and_badge() {
    let mut harness = UiHarness::new();
    harness.press(KeyCode::Enter);
    let screen = harness.render();

    assert!(screen.contains("1 of 5 steps completed"));
    assert!(screen.contains("✓ Done"));
}

#[test]
fn test_copy_flash_appears_then_clears() {
    let mut harness = UiHarness::new();
    harness.press(KeyCode::Char('c'));
    let screen = harness.render();
    assert!(screen.contains("✓ copied"));

    // Simulate the tick that fires after the flash window has elapsed
    harness
        .state
        .expire_copy_flash(Instant::now() + std::time::Duration::from_secs(3));
    let screen = harness.render();
    assert!(!screen.contains("✓ copied"));
}

#[test]
fn test_failed_copy_renders_error_indicator() {
    let mut harness = UiHarness::new();
    harness
        .state
        .begin_copy_flash("create-app", CopyOutcome::Failed, Instant::now());
    let screen = harness.render();
    assert!(screen.contains("✗ clipboard unavailable"));
}

#[test]
fn test_resources_panel_replaces_detail_pane() {
    let mut harness = UiHarness::new();
    harness.press(KeyCode::Char('G'));
    let screen = harness.render();

    assert!(screen.contains("Ready to Deploy?"));
    assert!(screen.contains("Custom Domains"));
    assert!(!screen.contains("✓ Done"));
}

#[test]
fn test_resources_accordion_expands_on_enter() {
    let mut harness = UiHarness::new();
    harness.press(KeyCode::Char('G'));
    let collapsed = harness.render();
    assert!(!collapsed.contains("vercel.com/docs"));

    harness.press(KeyCode::Enter);
    let expanded = harness.render();
    assert!(expanded.contains("▼ Custom Domains"));
    assert!(expanded.contains("https://vercel.com/docs"));
}

#[test]
fn test_tab_switch_reveals_cli_snippets() {
    let mut harness = UiHarness::new();
    harness.press(KeyCode::Char('3'));
    let dashboard = harness.render();
    assert!(dashboard.contains("Vercel Dashboard"));
    assert!(!dashboard.contains("npm i -g vercel"));

    harness.press(KeyCode::Tab);
    let cli = harness.render();
    assert!(cli.contains("npm i -g vercel"));
}

#[test]
fn test_help_overlay_toggles() {
    let mut harness = UiHarness::new();
    harness.press(KeyCode::Char('?'));
    let with_help = harness.render();
    assert!(with_help.contains("Keyboard Shortcuts"));

    harness.press(KeyCode::Esc);
    let without_help = harness.render();
    assert!(!without_help.contains("Keyboard Shortcuts"));
}

#[test]
fn test_rendering_is_deterministic_for_equal_state() {
    let mut first = UiHarness::new();
    let mut second = UiHarness::new();
    for harness in [&mut first, &mut second] {
        harness.press(KeyCode::Char('2'));
        harness.press(KeyCode::Enter);
    }
    assert_eq!(first.render(), second.render());
}
