// ABOUTME: Local progress tracking for guide steps
// Completion is volatile and resets when the process exits

use std::collections::BTreeSet;

use super::steps::{self, StepId};

/// Completion state of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Completed,
}

/// Set of steps the user has marked done
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    completed: BTreeSet<StepId>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of a step id. Ids outside the known catalog are
    /// accepted but have no effect.
    pub fn toggle(&mut self, id: StepId) {
        if !steps::contains(id) {
            tracing::debug!(step = %id, "toggle ignored for unknown step id");
            return;
        }
        if !self.completed.remove(&id) {
            self.completed.insert(id);
        }
    }

    pub fn status(&self, id: StepId) -> StepStatus {
        if self.completed.contains(&id) {
            StepStatus::Completed
        } else {
            StepStatus::Pending
        }
    }

    pub fn is_completed(&self, id: StepId) -> bool {
        self.status(id) == StepStatus::Completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total(&self) -> usize {
        steps::steps().len()
    }

    pub fn reset(&mut self) {
        self.completed.clear();
    }

    /// Human-readable progress readout shown in the header
    pub fn summary(&self) -> String {
        format!(
            "{} of {} steps completed",
            self.completed_count(),
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_progress_is_empty() {
        let progress = Progress::new();
        assert_eq!(progress.completed_count(), 0);
        assert_eq!(progress.summary(), "0 of 5 steps completed");
    }

    #[test]
    fn test_toggle_marks_single_step() {
        let mut progress = Progress::new();
        progress.toggle(StepId(3));

        assert_eq!(progress.summary(), "1 of 5 steps completed");
        assert_eq!(progress.status(StepId(3)), StepStatus::Completed);
        for other in [1, 2, 4, 5] {
            assert_eq!(progress.status(StepId(other)), StepStatus::Pending);
        }
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        for id in 1..=5u8 {
            let mut progress = Progress::new();
            progress.toggle(StepId(2));
            let before = progress.clone();

            progress.toggle(StepId(id));
            progress.toggle(StepId(id));
            assert_eq!(progress, before);
        }
    }

    #[test]
    fn test_unknown_id_is_a_noop() {
        let mut progress = Progress::new();
        progress.toggle(StepId(0));
        progress.toggle(StepId(6));
        progress.toggle(StepId(200));
        assert_eq!(progress.completed_count(), 0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut progress = Progress::new();
        for id in 1..=5u8 {
            progress.toggle(StepId(id));
        }
        assert_eq!(progress.completed_count(), 5);

        progress.reset();
        assert_eq!(progress, Progress::new());
    }
}
