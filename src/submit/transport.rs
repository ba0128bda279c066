use std::future::Future;

use url::Url;

use crate::form::payload::FormPayload;
use crate::submit::error::SubmitError;
use crate::submit::reply::RawResponse;

/// Sends one JSON POST and hands back whatever came back.
///
/// A completed exchange is `Ok` regardless of status code; `Err` means no
/// response was obtained.
pub trait Transport {
    fn post_json(
        &self,
        url: &Url,
        payload: &FormPayload,
    ) -> impl Future<Output = Result<RawResponse, SubmitError>> + Send;
}

/// `reqwest`-backed transport. No timeout is configured: a request that
/// never completes never settles.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &Url, payload: &FormPayload) -> Result<RawResponse, SubmitError> {
        // `json` sets `Content-Type: application/json`
        let response = self
            .client
            .post(url.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();

        // An unreadable body is treated like an empty one; the status still decides.
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                tracing::debug!(error = %e, %url, "failed to read reply body");
                Vec::new()
            }
        };

        Ok(RawResponse { status, body })
    }
}

/// Resolve a form's `action` attribute the way a browser does: relative to
/// the page URL, with an empty action meaning the page itself.
pub fn resolve_action(page_url: Option<&Url>, action: &str) -> Result<Url, SubmitError> {
    let action = action.trim();

    if action.is_empty() {
        return page_url.cloned().ok_or_else(|| SubmitError::InvalidAction {
            action: String::new(),
            reason: "empty action and no page URL".into(),
        });
    }

    let resolved = match page_url {
        Some(base) => base.join(action),
        None => Url::parse(action),
    };

    resolved.map_err(|e| SubmitError::InvalidAction {
        action: action.to_string(),
        reason: e.to_string(),
    })
}
