use std::fmt;

/// Reasons a submission never produced a response.
#[derive(Debug)]
pub enum SubmitError {
    /// The form's action could not be turned into an absolute URL
    InvalidAction { action: String, reason: String },

    /// The request could not be sent or no response came back
    Request(reqwest::Error),

    /// A non-HTTP transport reported failure
    Transport(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::InvalidAction { action, reason } => {
                write!(f, "Invalid form action '{}': {}", action, reason)
            }
            SubmitError::Request(source) => {
                write!(f, "Request failed: {}", source)
            }
            SubmitError::Transport(msg) => {
                write!(f, "Transport failed: {}", msg)
            }
        }
    }
}

impl SubmitError {
    /// The message followed by every underlying cause, `: `-separated.
    /// Causes already spelled out by an outer message are not repeated.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut cause = std::error::Error::source(self);

        while let Some(err) = cause {
            let text = err.to_string();
            if !detail.contains(&text) {
                detail.push_str(": ");
                detail.push_str(&text);
            }
            cause = err.source();
        }

        detail
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::Request(source) => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(e: reqwest::Error) -> Self {
        SubmitError::Request(e)
    }
}
