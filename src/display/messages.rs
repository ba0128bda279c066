use serde::{Deserialize, Serialize};

/// User-facing status texts for one submission cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessages {
    #[serde(default = "default_sending")]
    pub sending: String,

    /// Shown on 2xx when the reply has no `message`.
    #[serde(default = "default_success_fallback")]
    pub success_fallback: String,

    /// Shown on non-2xx when the reply has no `error`.
    #[serde(default = "default_failure_fallback")]
    pub failure_fallback: String,

    /// Shown when no response arrived at all.
    #[serde(default = "default_transport_failure")]
    pub transport_failure: String,
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self {
            sending: default_sending(),
            success_fallback: default_success_fallback(),
            failure_fallback: default_failure_fallback(),
            transport_failure: default_transport_failure(),
        }
    }
}

fn default_sending() -> String { "Sending...".to_string() }
fn default_success_fallback() -> String {
    "Thank you for your message. We have received it and will contact you soon.".to_string()
}
fn default_failure_fallback() -> String { "Sending failed, please try again later.".to_string() }
fn default_transport_failure() -> String {
    "Unable to send, please check your network or try again later.".to_string()
}
