use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    display::display_model::StatusLine,
    form::form_model::{FormControl, HtmlForm},
};

pub const DEFAULT_FORM_ID: &str = "contactForm";
pub const DEFAULT_RESULT_ID: &str = "formResult";

/// A static description of a page: its URL plus the form and result
/// elements it contains, keyed by element id.
///
/// ```yaml
/// url: https://example.com/contact
/// forms:
///   - id: contactForm
///     action: /contact
///     controls:
///       - { name: email, kind: email, input: jane@example.com }
/// results:
///   - id: formResult
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageDocument {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub forms: Vec<FormElement>,

    #[serde(default)]
    pub results: Vec<ResultElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormElement {
    pub id: String,

    #[serde(default)]
    pub action: String,

    #[serde(default)]
    pub controls: Vec<FormControl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultElement {
    pub id: String,
}

impl PageDocument {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read page file '{}': {}", path, e))?;
        Ok(Self::from_yaml(&content)?)
    }

    pub fn page_url(&self) -> Result<Option<Url>, url::ParseError> {
        parse_page_url(self.url.as_deref())
    }

    /// Build a live form for the element with this id. The first match wins,
    /// as with `getElementById`.
    pub fn form(&self, id: &str) -> Option<HtmlForm> {
        self.forms
            .iter()
            .find(|f| f.id == id)
            .map(|f| HtmlForm::with_controls(&f.id, &f.action, f.controls.clone()))
    }

    pub fn result(&self, id: &str) -> Option<StatusLine> {
        self.results
            .iter()
            .find(|r| r.id == id)
            .map(|r| StatusLine::new(&r.id))
    }
}

/// Parse an optional page URL. Absent stays absent.
pub fn parse_page_url(raw: Option<&str>) -> Result<Option<Url>, url::ParseError> {
    raw.map(Url::parse).transpose()
}
