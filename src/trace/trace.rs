use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    display::display_model::DisplayState,
    form::payload::FormPayload,
    submit::outcome::SubmissionOutcome,
};

/// One line of the submission trace. Field values never appear in clear;
/// the payload is represented by its fingerprint.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub form_id: String,
    pub action: String,

    pub field_count: usize,
    pub payload_fingerprint: Option<String>,

    pub display_state: Option<DisplayState>,
    pub outcome: Option<String>,
    pub status: Option<u16>,
}

impl TraceEvent {
    pub fn now(form_id: &str, action: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            form_id: form_id.to_string(),
            action: action.to_string(),
            field_count: 0,
            payload_fingerprint: None,
            display_state: None,
            outcome: None,
            status: None,
        }
    }

    pub fn with_payload(mut self, payload: &FormPayload) -> Self {
        self.field_count = payload.len();
        self.payload_fingerprint = Some(payload.fingerprint());
        self
    }

    pub fn with_outcome(mut self, outcome: &SubmissionOutcome) -> Self {
        self.display_state = Some(outcome.display_state());
        self.outcome = Some(outcome.kind().to_string());
        self.status = outcome.status();
        self
    }
}
