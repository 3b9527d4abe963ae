// ABOUTME: Unit tests for AppState navigation, progress, and the copy flash lifecycle

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use shipmate::app::state::{AppState, CopyOutcome, Entry, SnippetStatus};
use shipmate::config::UiConfig;
use shipmate::guide::StepId;

#[test]
fn test_fresh_state_reads_zero_of_five() {
    let state = AppState::new();
    assert_eq!(state.progress.summary(), "0 of 5 steps completed");
    assert_eq!(state.selected(), Entry::Step(StepId(1)));
}

#[test]
fn test_toggle_updates_progress_readout() {
    let mut state = AppState::new();
    state.jump_to_step(3);
    state.activate_selected();

    assert_eq!(state.progress.summary(), "1 of 5 steps completed");
    assert!(state.progress.is_completed(StepId(3)));
    for other in [1, 2, 4, 5] {
        assert!(!state.progress.is_completed(StepId(other)));
    }
}

#[test]
fn test_toggle_is_an_involution_through_activate() {
    let mut state = AppState::new();
    for number in 1..=5u8 {
        state.jump_to_step(number);
        state.activate_selected();
        state.activate_selected();
    }
    assert_eq!(state.progress.completed_count(), 0);
}

#[test]
fn test_navigation_covers_steps_and_resources() {
    let mut state = AppState::new();
    let mut seen = Vec::new();
    loop {
        seen.push(state.selected());
        let before = state.selected_entry;
        state.select_next();
        if state.selected_entry == before {
            break;
        }
    }
    assert_eq!(seen.len(), 6);
    assert_eq!(seen.last(), Some(&Entry::Resources));
}

#[test]
fn test_copy_flash_respects_configured_duration() {
    let config = UiConfig {
        tick_rate_ms: 250,
        copy_flash_ms: 500,
    };
    let mut state = AppState::from_config(&config);
    let base = Instant::now();

    state.begin_copy_flash("git-init", CopyOutcome::Copied, base);
    state.expire_copy_flash(base + Duration::from_millis(499));
    assert_eq!(state.snippet_status("git-init"), SnippetStatus::JustCopied);

    state.expire_copy_flash(base + Duration::from_millis(500));
    assert_eq!(state.snippet_status("git-init"), SnippetStatus::Idle);
}

#[test]
fn test_rapid_successive_copies_keep_the_latest_flash() {
    let mut state = AppState::new();
    let base = Instant::now();

    state.begin_copy_flash("install-cli", CopyOutcome::Copied, base);
    state.begin_copy_flash("deploy-cli", CopyOutcome::Copied, base + Duration::from_millis(100));

    // Ticks at and after the first flash's deadline must not clear the second
    state.expire_copy_flash(base + Duration::from_millis(2000));
    assert_eq!(state.snippet_status("deploy-cli"), SnippetStatus::JustCopied);

    state.expire_copy_flash(base + Duration::from_millis(2100));
    assert_eq!(state.snippet_status("deploy-cli"), SnippetStatus::Idle);
}

#[test]
fn test_reset_progress() {
    let mut state = AppState::new();
    for number in 1..=5u8 {
        state.jump_to_step(number);
        state.activate_selected();
    }
    assert_eq!(state.progress.completed_count(), 5);

    state.progress.reset();
    assert_eq!(state.progress.summary(), "0 of 5 steps completed");
}
