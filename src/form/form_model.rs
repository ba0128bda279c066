use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

// ============================================================================
// Controls
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    #[default]
    Text,
    Email,
    Tel,
    Textarea,
    Hidden,
    Select,
    Checkbox,
    Radio,
    Submit,
    Reset,
    Button,
}

impl ControlKind {
    /// Checkboxes and radios only contribute to form data while checked.
    pub fn is_checkable(self) -> bool {
        matches!(self, ControlKind::Checkbox | ControlKind::Radio)
    }

    /// Buttons never contribute to form data.
    pub fn is_button(self) -> bool {
        matches!(
            self,
            ControlKind::Submit | ControlKind::Reset | ControlKind::Button
        )
    }
}

/// A single named control inside a form.
///
/// `value` and `checked` mirror the HTML attributes and are what a reset
/// restores. What the user typed or toggled since then lives in `input` /
/// `input_checked`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormControl {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub kind: ControlKind,

    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub checked: bool,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_checked: Option<bool>,
}

impl FormControl {
    pub fn new(name: &str, kind: ControlKind) -> Self {
        Self {
            name: Some(name.to_string()),
            kind,
            ..Self::default()
        }
    }

    pub fn text(name: &str) -> Self {
        Self::new(name, ControlKind::Text)
    }

    pub fn with_default(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn with_input(mut self, value: &str) -> Self {
        self.input = Some(value.to_string());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// The value the control currently shows.
    pub fn current_value(&self) -> String {
        self.input
            .clone()
            .or_else(|| self.value.clone())
            .unwrap_or_default()
    }

    pub fn is_checked(&self) -> bool {
        self.input_checked.unwrap_or(self.checked)
    }

    pub fn set_value(&mut self, value: &str) {
        self.input = Some(value.to_string());
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.input_checked = Some(checked);
    }

    /// Drop user edits so the control shows its defaults again.
    pub fn reset(&mut self) {
        self.input = None;
        self.input_checked = None;
    }

    /// The `(name, value)` pair this control adds to form data, if any.
    pub fn entry(&self) -> Option<(String, String)> {
        let name = self.name.as_deref().filter(|n| !n.is_empty())?;

        if self.disabled || self.kind.is_button() {
            return None;
        }

        if self.kind.is_checkable() {
            if !self.is_checked() {
                return None;
            }
            let value = self.value.clone().unwrap_or_else(|| "on".to_string());
            return Some((name.to_string(), value));
        }

        Some((name.to_string(), self.current_value()))
    }
}

// ============================================================================
// Form target
// ============================================================================

/// The form side of the DOM contract: where to post, what to post, and how
/// to clear it after a successful submission.
pub trait FormTarget {
    fn id(&self) -> &str;

    /// The raw `action` attribute. May be relative or empty.
    fn action(&self) -> String;

    /// Form-data entries in document order, as of this call.
    fn entries(&self) -> Vec<(String, String)>;

    fn reset(&self);
}

impl<T: FormTarget + ?Sized> FormTarget for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn action(&self) -> String {
        (**self).action()
    }

    fn entries(&self) -> Vec<(String, String)> {
        (**self).entries()
    }

    fn reset(&self) {
        (**self).reset()
    }
}

/// In-memory form element. Controls sit behind a mutex so overlapping
/// submissions can read and reset through shared references.
#[derive(Debug)]
pub struct HtmlForm {
    id: String,
    action: String,
    controls: Mutex<Vec<FormControl>>,
}

impl HtmlForm {
    pub fn new(id: &str, action: &str) -> Self {
        Self::with_controls(id, action, Vec::new())
    }

    pub fn with_controls(id: &str, action: &str, controls: Vec<FormControl>) -> Self {
        Self {
            id: id.to_string(),
            action: action.to_string(),
            controls: Mutex::new(controls),
        }
    }

    pub fn push(&self, control: FormControl) {
        self.lock().push(control);
    }

    /// Simulate typing into the first control called `name`.
    /// Returns false when no such control exists.
    pub fn fill(&self, name: &str, value: &str) -> bool {
        let mut controls = self.lock();
        match controls
            .iter_mut()
            .find(|c| c.name.as_deref() == Some(name))
        {
            Some(control) => {
                control.set_value(value);
                true
            }
            None => false,
        }
    }

    pub fn toggle(&self, name: &str, checked: bool) -> bool {
        let mut controls = self.lock();
        match controls
            .iter_mut()
            .find(|c| c.name.as_deref() == Some(name) && c.kind.is_checkable())
        {
            Some(control) => {
                control.set_checked(checked);
                true
            }
            None => false,
        }
    }

    pub fn value_of(&self, name: &str) -> Option<String> {
        self.lock()
            .iter()
            .find(|c| c.name.as_deref() == Some(name))
            .map(FormControl::current_value)
    }

    pub fn controls(&self) -> Vec<FormControl> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<FormControl>> {
        self.controls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FormTarget for HtmlForm {
    fn id(&self) -> &str {
        &self.id
    }

    fn action(&self) -> String {
        self.action.clone()
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.lock().iter().filter_map(FormControl::entry).collect()
    }

    fn reset(&self) {
        for control in self.lock().iter_mut() {
            control.reset();
        }
    }
}

// ============================================================================
// Submit event
// ============================================================================

/// A submission event raised by a bound form.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the native navigation/submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
