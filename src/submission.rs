//! Submission State
//!
//! `Idle -> Submitting -> Queued | Failed`, with re-entrant submits ignored
//! while a request is in flight.

use crate::error::ApiError;

pub const SUBMITTING_STATUS: &str = "Submitting...";
pub const QUEUED_STATUS: &str = "Queued.";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Queued,
    Failed(String),
}

/// What the form must do once a submission settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AfterSubmit {
    pub reset_form: bool,
    pub refresh: bool,
}

impl SubmitPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Enter `Submitting`. Returns `false` if a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    pub fn finish(&mut self, outcome: Result<(), ApiError>) -> AfterSubmit {
        match outcome {
            Ok(()) => {
                *self = Self::Queued;
                AfterSubmit { reset_form: true, refresh: true }
            }
            Err(e) => {
                *self = Self::Failed(e.status_message());
                AfterSubmit { reset_form: false, refresh: false }
            }
        }
    }

    pub fn status_text(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Submitting => SUBMITTING_STATUS,
            Self::Queued => QUEUED_STATUS,
            Self::Failed(message) => message,
        }
    }
}
