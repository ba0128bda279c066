use std::future::Future;

use url::Url;

use crate::{
    display::{
        display_model::{ResultDisplay, TextColor},
        messages::StatusMessages,
    },
    form::{
        form_model::{FormTarget, SubmitEvent},
        payload::FormPayload,
    },
    submit::{
        error::SubmitError,
        outcome::SubmissionOutcome,
        reply::ServerReply,
        transport::{Transport, resolve_action},
    },
    trace::{logger::TraceLogger, trace::TraceEvent},
};

/// Target for submission diagnostics. Transport failure causes are logged
/// here and nowhere else.
pub const LOG_TARGET: &str = "contact_form::submit";

/// Replaces a form's native submission with an async JSON POST and reflects
/// the result on a display element.
///
/// Overlapping submissions are not coordinated: each one writes the display
/// when it settles, so the last to settle wins.
pub struct FormSubmitHandler<F, D, T> {
    form: F,
    display: D,
    transport: T,
    page_url: Option<Url>,
    messages: StatusMessages,
    tracer: Option<TraceLogger>,
}

impl<F, D, T> FormSubmitHandler<F, D, T>
where
    F: FormTarget,
    D: ResultDisplay,
    T: Transport,
{
    /// Bind to a form. Without a form there is nothing to intercept, so no
    /// handler is created.
    pub fn attach(form: Option<F>, display: D, transport: T) -> Option<Self> {
        let Some(form) = form else {
            tracing::debug!(target: LOG_TARGET, "no form to bind, skipping setup");
            return None;
        };

        tracing::debug!(target: LOG_TARGET, form = form.id(), "submit handler attached");

        Some(Self {
            form,
            display,
            transport,
            page_url: None,
            messages: StatusMessages::default(),
            tracer: None,
        })
    }

    /// Wait for the page to be ready, then [`attach`](Self::attach).
    pub async fn attach_when_ready<R>(
        ready: R,
        form: Option<F>,
        display: D,
        transport: T,
    ) -> Option<Self>
    where
        R: Future<Output = ()>,
    {
        ready.await;
        Self::attach(form, display, transport)
    }

    /// Base for relative form actions.
    pub fn with_page_url(mut self, page_url: Url) -> Self {
        self.page_url = Some(page_url);
        self
    }

    pub fn with_messages(mut self, messages: StatusMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = Some(tracer);
        self
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Handle one submit event.
    ///
    /// Default prevention, the pending status and the payload snapshot all
    /// happen before this returns; the returned future only performs the
    /// round trip and the final display update. It never fails: every path
    /// ends in a display update.
    pub fn on_submit<'a>(
        &'a self,
        event: &mut SubmitEvent,
    ) -> impl Future<Output = SubmissionOutcome> + use<'a, F, D, T> {
        event.prevent_default();

        self.display.set_color(TextColor::Neutral);
        self.display.set_text(&self.messages.sending);

        let payload = FormPayload::snapshot(&self.form);
        let target = resolve_action(self.page_url.as_ref(), &self.form.action());

        tracing::debug!(
            target: LOG_TARGET,
            form = self.form.id(),
            fields = payload.len(),
            "submission pending"
        );

        async move { self.complete(target, payload).await }
    }

    async fn complete(&self, target: Result<Url, SubmitError>, payload: FormPayload) -> SubmissionOutcome {
        let action = match &target {
            Ok(url) => url.to_string(),
            Err(_) => self.form.action(),
        };

        let exchange = match target {
            Ok(url) => self.transport.post_json(&url, &payload).await,
            Err(e) => Err(e),
        };

        let outcome = match exchange {
            Ok(response) => self.settle(ServerReply::from_response(&response)),
            Err(e) => self.fail(&e),
        };

        if let Some(tracer) = &self.tracer {
            tracer.log(
                &TraceEvent::now(self.form.id(), &action)
                    .with_payload(&payload)
                    .with_outcome(&outcome),
            );
        }

        outcome
    }

    fn settle(&self, reply: ServerReply) -> SubmissionOutcome {
        match reply {
            ServerReply::Ok { message } => {
                let message = message.unwrap_or_else(|| self.messages.success_fallback.clone());
                self.display.set_color(TextColor::Green);
                self.display.set_text(&message);
                self.form.reset();

                tracing::info!(target: LOG_TARGET, form = self.form.id(), "submission accepted");
                SubmissionOutcome::Success { message }
            }
            ServerReply::Err { status, error } => {
                let error = error.unwrap_or_else(|| self.messages.failure_fallback.clone());
                self.display.set_color(TextColor::Red);
                self.display.set_text(&error);

                tracing::info!(target: LOG_TARGET, form = self.form.id(), status, "submission rejected");
                SubmissionOutcome::Rejected { status, error }
            }
        }
    }

    fn fail(&self, error: &SubmitError) -> SubmissionOutcome {
        self.display.set_color(TextColor::Red);
        self.display.set_text(&self.messages.transport_failure);

        let cause = error.detail();
        tracing::error!(target: LOG_TARGET, form = self.form.id(), error = %cause, "form submission failed");
        SubmissionOutcome::TransportFailure { cause }
    }
}
