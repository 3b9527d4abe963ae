// ABOUTME: Application state for the guide TUI
// Rendering is a pure function of this state; nothing else feeds the UI

use std::time::{Duration, Instant};

use crate::clipboard::{ClipboardSink, SystemClipboard, UnavailableClipboard};
use crate::config::UiConfig;
use crate::guide::{self, Progress, Snippet, Step, StepId};

/// Entry selected in the sidebar: a guide step or the resources panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Step(StepId),
    Resources,
}

/// Outcome of the most recent copy attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// Transient indicator of which snippet was last copied, with the deadline at
/// which it disappears. A new copy replaces this wholesale, so a superseded
/// flash can never clear its successor.
#[derive(Debug, Clone)]
pub struct CopyFlash {
    pub snippet_id: String,
    pub outcome: CopyOutcome,
    pub expires_at: Instant,
}

/// Display state of a snippet block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetStatus {
    Idle,
    JustCopied,
    CopyFailed,
}

#[derive(Debug)]
pub struct AppState {
    pub progress: Progress,
    pub copy_flash: Option<CopyFlash>,
    /// Index into the sidebar entries (steps then resources)
    pub selected_entry: usize,
    /// Selected snippet within the current step's visible snippets
    pub selected_snippet: usize,
    /// Active tab per step, indexed by step position
    pub active_tabs: Vec<usize>,
    /// Currently expanded resource topic, if any
    pub expanded_resource: Option<usize>,
    pub help_visible: bool,
    pub should_quit: bool,
    copy_flash_ms: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::from_config(&UiConfig::default())
    }

    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            progress: Progress::new(),
            copy_flash: None,
            selected_entry: 0,
            selected_snippet: 0,
            active_tabs: vec![0; guide::steps().len()],
            expanded_resource: None,
            help_visible: false,
            should_quit: false,
            copy_flash_ms: config.copy_flash_ms,
        }
    }

    /// Sidebar entry count: all steps plus the resources panel
    pub fn entry_count(&self) -> usize {
        guide::steps().len() + 1
    }

    pub fn selected(&self) -> Entry {
        match guide::steps().get(self.selected_entry) {
            Some(step) => Entry::Step(step.id),
            None => Entry::Resources,
        }
    }

    pub fn selected_step(&self) -> Option<&'static Step> {
        guide::steps().get(self.selected_entry)
    }

    pub fn select_next(&mut self) {
        if self.selected_entry + 1 < self.entry_count() {
            self.selected_entry += 1;
            self.selected_snippet = 0;
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected_entry > 0 {
            self.selected_entry -= 1;
            self.selected_snippet = 0;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_entry = 0;
        self.selected_snippet = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_entry = self.entry_count() - 1;
        self.selected_snippet = 0;
    }

    /// Jump directly to a step by its 1-indexed number; out-of-range numbers
    /// are ignored
    pub fn jump_to_step(&mut self, number: u8) {
        let idx = usize::from(number.saturating_sub(1));
        if number >= 1 && idx < guide::steps().len() {
            self.selected_entry = idx;
            self.selected_snippet = 0;
        }
    }

    /// Active tab of the selected step
    pub fn active_tab(&self) -> usize {
        self.active_tabs
            .get(self.selected_entry)
            .copied()
            .unwrap_or(0)
    }

    /// Cycle to the next tab of the selected step, if it has tabs
    pub fn next_tab(&mut self) {
        let Some(step) = self.selected_step() else {
            return;
        };
        let tabs = step.tab_count();
        if tabs > 1 {
            let tab = &mut self.active_tabs[self.selected_entry];
            *tab = (*tab + 1) % tabs;
            self.selected_snippet = 0;
        }
    }

    /// Snippets visible in the selected step under its active tab
    pub fn visible_snippets(&self) -> Vec<&'static Snippet> {
        self.selected_step()
            .map(|step| step.snippets(self.active_tab()))
            .unwrap_or_default()
    }

    /// The snippet the copy action would target
    pub fn current_snippet(&self) -> Option<&'static Snippet> {
        let snippets = self.visible_snippets();
        if snippets.is_empty() {
            return None;
        }
        let idx = self.selected_snippet.min(snippets.len() - 1);
        Some(snippets[idx])
    }

    pub fn select_next_snippet(&mut self) {
        let count = self.visible_snippets().len();
        if count > 0 {
            self.selected_snippet = (self.selected_snippet + 1) % count;
        }
    }

    pub fn select_previous_snippet(&mut self) {
        let count = self.visible_snippets().len();
        if count > 0 {
            self.selected_snippet = (self.selected_snippet + count - 1) % count;
        }
    }

    /// Toggle completion of the selected step, or advance the resources
    /// accordion
    pub fn activate_selected(&mut self) {
        match self.selected() {
            Entry::Step(id) => self.progress.toggle(id),
            Entry::Resources => {
                // Single-expansion accordion: cycle through topics, then close
                self.expanded_resource = match self.expanded_resource {
                    None => Some(0),
                    Some(idx) if idx + 1 < guide::RESOURCE_TOPICS.len() => Some(idx + 1),
                    Some(_) => None,
                };
            }
        }
    }

    /// Record a copy attempt. Replaces any pending flash, cancelling its
    /// deadline along with it.
    pub fn begin_copy_flash(&mut self, snippet_id: &str, outcome: CopyOutcome, now: Instant) {
        self.copy_flash = Some(CopyFlash {
            snippet_id: snippet_id.to_string(),
            outcome,
            expires_at: now + Duration::from_millis(self.copy_flash_ms),
        });
    }

    /// Clear the flash once its own deadline has passed. Called from the event
    /// loop tick.
    pub fn expire_copy_flash(&mut self, now: Instant) {
        if self
            .copy_flash
            .as_ref()
            .is_some_and(|flash| now >= flash.expires_at)
        {
            self.copy_flash = None;
        }
    }

    /// Display state of a snippet, derived from the current flash
    pub fn snippet_status(&self, snippet_id: &str) -> SnippetStatus {
        match &self.copy_flash {
            Some(flash) if flash.snippet_id == snippet_id => match flash.outcome {
                CopyOutcome::Copied => SnippetStatus::JustCopied,
                CopyOutcome::Failed => SnippetStatus::CopyFailed,
            },
            _ => SnippetStatus::Idle,
        }
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Application root: state plus the clipboard capability
pub struct App {
    pub state: AppState,
    pub clipboard: Box<dyn ClipboardSink>,
}

impl App {
    /// Build the app with the system clipboard. If no clipboard backend is
    /// available the failure is kept and surfaced on the first copy attempt.
    pub fn new(config: &UiConfig) -> Self {
        let clipboard: Box<dyn ClipboardSink> = match SystemClipboard::new() {
            Ok(clipboard) => Box::new(clipboard),
            Err(e) => {
                tracing::warn!(error = %e, "system clipboard unavailable");
                Box::new(UnavailableClipboard::new(&e))
            }
        };
        Self::with_clipboard(config, clipboard)
    }

    pub fn with_clipboard(config: &UiConfig, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            state: AppState::from_config(config),
            clipboard,
        }
    }

    /// Advance time-driven state; called once per event loop iteration
    pub fn tick(&mut self) {
        self.state.expire_copy_flash(Instant::now());
    }
}
