use crate::display::display_model::{DisplayState, TextColor};

/// How one submission cycle ended. `Success` and `Rejected` carry the text
/// that was put on the display; `TransportFailure` carries the diagnostic
/// cause, which is never shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { message: String },
    Rejected { status: u16, error: String },
    TransportFailure { cause: String },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }

    pub fn color(&self) -> TextColor {
        match self {
            SubmissionOutcome::Success { .. } => TextColor::Green,
            _ => TextColor::Red,
        }
    }

    pub fn display_state(&self) -> DisplayState {
        match self {
            SubmissionOutcome::Success { .. } => DisplayState::Resolved,
            _ => DisplayState::Failed,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SubmissionOutcome::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionOutcome::Success { .. } => "success",
            SubmissionOutcome::Rejected { .. } => "rejected",
            SubmissionOutcome::TransportFailure { .. } => "transport_failure",
        }
    }
}
