use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

use contact_form::{
    display::display_model::{DisplaySnapshot, StatusLine},
    form::payload::FormPayload,
    submit::{error::SubmitError, reply::RawResponse, transport::Transport},
};
use tokio::sync::oneshot;
use url::Url;

/// What the next request will run into.
pub enum Script {
    Reply(RawResponse),
    Fail(String),
    /// Never settles.
    Hang,
    /// Settles when the test sends a response.
    Gate(oneshot::Receiver<RawResponse>),
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub payload: FormPayload,
    /// The watched display at the moment the request was issued.
    pub display_at_send: Option<DisplaySnapshot>,
}

/// Transport that plays back scripted results in order. Unscripted
/// requests get `200 {}`.
#[derive(Default)]
pub struct ScriptedTransport {
    scripts: Mutex<VecDeque<Script>>,
    calls: Mutex<Vec<RecordedCall>>,
    watch: Option<Arc<StatusLine>>,
}

impl ScriptedTransport {
    pub fn new(scripts: Vec<Script>) -> Self {
        Self {
            scripts: Mutex::new(scripts.into()),
            ..Self::default()
        }
    }

    pub fn replying(status: u16, body: &str) -> Self {
        Self::new(vec![Script::Reply(RawResponse::new(status, body))])
    }

    pub fn failing(cause: &str) -> Self {
        Self::new(vec![Script::Fail(cause.to_string())])
    }

    pub fn watching(mut self, display: Arc<StatusLine>) -> Self {
        self.watch = Some(display);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn post_json(
        &self,
        url: &Url,
        payload: &FormPayload,
    ) -> impl Future<Output = Result<RawResponse, SubmitError>> + Send {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            payload: payload.clone(),
            display_at_send: self.watch.as_ref().map(|d| d.snapshot()),
        });

        let script = self
            .scripts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Script::Reply(RawResponse::new(200, "{}")));

        async move {
            match script {
                Script::Reply(response) => Ok(response),
                Script::Fail(cause) => Err(SubmitError::Transport(cause)),
                Script::Hang => std::future::pending().await,
                Script::Gate(rx) => rx
                    .await
                    .map_err(|_| SubmitError::Transport("gate dropped".into())),
            }
        }
    }
}
