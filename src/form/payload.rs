use std::collections::BTreeMap;

use serde::Serialize;
use sha1::{Digest, Sha1};

use crate::form::form_model::FormTarget;

/// Field name → value snapshot of a form, serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormPayload(BTreeMap<String, String>);

impl FormPayload {
    /// Later entries overwrite earlier ones with the same name.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self(entries.into_iter().collect())
    }

    pub fn snapshot<F: FormTarget + ?Sized>(form: &F) -> Self {
        Self::from_entries(form.entries())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// SHA-1 of the JSON body, for traces that must not carry contact data.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha1::new();
        hasher.update(self.to_json().unwrap_or_default().as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
