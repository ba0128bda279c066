use crate::display::display_model::{DisplaySnapshot, DisplayState};
use crate::form::payload::FormPayload;

// ============================================================================
// Console reporter — the result display as terminal text
// ============================================================================

/// Render a result display for the terminal.
///
/// ```text
/// [pending] Sending...
/// ✓ Thanks!
/// ✗ Invalid email
/// ```
///
/// An idle display renders as an empty string.
pub fn format_display_line(snapshot: &DisplaySnapshot) -> String {
    match snapshot.state() {
        DisplayState::Idle => String::new(),
        DisplayState::Pending => format!("[pending] {}", snapshot.text),
        DisplayState::Resolved => format!("\u{2713} {}", snapshot.text),
        DisplayState::Failed => format!("\u{2717} {}", snapshot.text),
    }
}

/// One line naming the fields about to be sent. Values are left out.
pub fn format_payload_summary(form_id: &str, payload: &FormPayload) -> String {
    let names: Vec<&str> = payload.iter().map(|(name, _)| name).collect();
    format!(
        "Submitting form '{}' ({} fields: {})",
        form_id,
        names.len(),
        if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        }
    )
}
