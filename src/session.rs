//! Session state machine driving the analyze flow.
//!
//! Idle accepts selection edits; Submitting freezes the selection while the
//! single in-flight request runs; Results holds the outcome until reset.
//! Duplicate submissions are structurally impossible because `begin_submit`
//! is only honored in Idle.

use crate::api::AnalysisOutcome;
use crate::selection::{Intake, SelectedFile, SelectionSet, LIMIT_MESSAGE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Results,
}

/// Exactly one surface is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    UploadForm,
    Progress,
    Results,
}

#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    selection: SelectionSet,
    outcome: Option<AnalysisOutcome>,
    last_error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn outcome(&self) -> Option<&AnalysisOutcome> {
        self.outcome.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn active_view(&self) -> ActiveView {
        match self.phase {
            Phase::Idle => ActiveView::UploadForm,
            Phase::Submitting => ActiveView::Progress,
            Phase::Results => ActiveView::Results,
        }
    }

    /// Runs a batch of candidates through intake. Only honored in Idle;
    /// selection edits never change the phase.
    pub fn add_files(&mut self, candidates: Vec<SelectedFile>) {
        if self.phase != Phase::Idle {
            return;
        }

        match self.selection.admit(candidates) {
            Intake::Accepted { last_rejection } => self.last_error = last_rejection,
            Intake::Ignored => {}
            Intake::Overflow => self.last_error = Some(LIMIT_MESSAGE.to_string()),
        }
    }

    pub fn remove_file(&mut self, index: usize) {
        if self.phase == Phase::Idle {
            self.selection.remove(index);
        }
    }

    /// Freezes the selection and enters Submitting. Returns `None` (no-op)
    /// when not in Idle or when the selection is empty.
    pub fn begin_submit(&mut self) -> Option<SelectionSet> {
        if self.phase != Phase::Idle || self.selection.is_empty() {
            return None;
        }
        self.phase = Phase::Submitting;
        Some(self.selection.clone())
    }

    /// Stores the outcome and enters Results, clearing any stale error.
    pub fn complete_success(&mut self, outcome: AnalysisOutcome) {
        if self.phase != Phase::Submitting {
            return;
        }
        self.outcome = Some(outcome);
        self.last_error = None;
        self.phase = Phase::Results;
    }

    /// Returns to Idle with the selection intact so the user can retry
    /// without re-uploading.
    pub fn complete_failure(&mut self, message: impl Into<String>) {
        if self.phase != Phase::Submitting {
            return;
        }
        self.last_error = Some(message.into());
        self.phase = Phase::Idle;
    }

    /// Clears selection, outcome, and error together.
    pub fn reset(&mut self) {
        *self = Session::default();
    }
}
