use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[default]
    Neutral,
    Green,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayState {
    Idle,
    Pending,
    Resolved,
    Failed,
}

/// The result element side of the DOM contract.
pub trait ResultDisplay {
    fn set_text(&self, text: &str);
    fn set_color(&self, color: TextColor);
}

impl<T: ResultDisplay + ?Sized> ResultDisplay for Arc<T> {
    fn set_text(&self, text: &str) {
        (**self).set_text(text)
    }

    fn set_color(&self, color: TextColor) {
        (**self).set_color(color)
    }
}

/// What a display shows at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplaySnapshot {
    pub text: String,
    pub color: TextColor,
}

impl DisplaySnapshot {
    /// Derived from what is visible: empty is idle, red is failed, green is
    /// resolved, anything else is still pending.
    pub fn state(&self) -> DisplayState {
        if self.text.is_empty() {
            return DisplayState::Idle;
        }
        match self.color {
            TextColor::Green => DisplayState::Resolved,
            TextColor::Red => DisplayState::Failed,
            TextColor::Neutral => DisplayState::Pending,
        }
    }
}

/// In-memory result element.
#[derive(Debug, Default)]
pub struct StatusLine {
    id: String,
    inner: Mutex<DisplaySnapshot>,
}

impl StatusLine {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            inner: Mutex::new(DisplaySnapshot::default()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> DisplayState {
        self.snapshot().state()
    }
}

impl ResultDisplay for StatusLine {
    fn set_text(&self, text: &str) {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).text = text.to_string();
    }

    fn set_color(&self, color: TextColor) {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).color = color;
    }
}
