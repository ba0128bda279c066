use std::sync::Arc;

use url::Url;

use crate::cli::config::AppConfig;
use crate::display::display_model::StatusLine;
use crate::form::form_model::{FormControl, FormTarget, HtmlForm, SubmitEvent};
use crate::form::payload::FormPayload;
use crate::page::page_model::{PageDocument, parse_page_url};
use crate::report::console::{format_display_line, format_payload_summary};
use crate::submit::handler::FormSubmitHandler;
use crate::submit::transport::HttpTransport;
use crate::trace::logger::TraceLogger;

// ============================================================================
// submit subcommand
// ============================================================================

/// Submit a form assembled from `name=value` pairs. Returns whether the
/// server accepted it.
pub async fn cmd_submit(
    action: &str,
    fields: &[(String, String)],
    page_url: Option<&str>,
    config: &AppConfig,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let form = build_form(&config.page.form_id, action, fields);
    let display = StatusLine::new(&config.page.result_id);
    let raw = page_url.or(config.page.url.as_deref());
    let page_url = parse_page_url(raw).map_err(|e| invalid_page_url(raw, e))?;

    submit_once(Some(form), display, page_url, config, verbose).await
}

/// Build a form whose controls hold the given values as user input.
pub fn build_form(form_id: &str, action: &str, fields: &[(String, String)]) -> HtmlForm {
    let controls = fields
        .iter()
        .map(|(name, value)| FormControl::text(name).with_input(value))
        .collect();
    HtmlForm::with_controls(form_id, action, controls)
}

// ============================================================================
// page subcommand
// ============================================================================

/// Load a page description and submit its form. A page without the form is
/// not an error: nothing is bound and nothing is printed.
pub async fn cmd_page(
    file: &str,
    form_id: Option<&str>,
    result_id: Option<&str>,
    config: &AppConfig,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let page = PageDocument::load(file)?;
    let form_id = form_id.unwrap_or(&config.page.form_id);
    let result_id = result_id.unwrap_or(&config.page.result_id);

    let display = match page.result(result_id) {
        Some(display) => display,
        None => {
            tracing::warn!(result_id, "page has no result element, using a detached one");
            StatusLine::new(result_id)
        }
    };

    let page_url = match page.page_url().map_err(|e| invalid_page_url(page.url.as_deref(), e))? {
        Some(url) => Some(url),
        None => {
            let raw = config.page.url.as_deref();
            parse_page_url(raw).map_err(|e| invalid_page_url(raw, e))?
        }
    };

    submit_once(page.form(form_id), display, page_url, config, verbose).await
}

// ============================================================================
// Helpers
// ============================================================================

async fn submit_once(
    form: Option<HtmlForm>,
    display: StatusLine,
    page_url: Option<Url>,
    config: &AppConfig,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let display = Arc::new(display);

    let Some(mut handler) = FormSubmitHandler::attach(form, Arc::clone(&display), HttpTransport::new())
    else {
        return Ok(true);
    };

    handler = handler.with_messages(config.messages.clone());

    if let Some(url) = page_url {
        handler = handler.with_page_url(url);
    }

    if let Some(path) = &config.trace.path {
        match TraceLogger::open(path) {
            Ok(tracer) => handler = handler.with_tracer(tracer),
            Err(e) => tracing::warn!(path, error = %e, "could not open trace file, tracing disabled"),
        }
    }

    if verbose > 0 {
        let payload = FormPayload::snapshot(handler.form());
        eprintln!("{}", format_payload_summary(handler.form().id(), &payload));
    }

    let mut event = SubmitEvent::new();
    let pending = handler.on_submit(&mut event);

    if verbose > 0 {
        eprintln!("{}", format_display_line(&display.snapshot()));
    }

    let outcome = pending.await;
    println!("{}", format_display_line(&display.snapshot()));

    Ok(outcome.is_success())
}

fn invalid_page_url(raw: Option<&str>, e: url::ParseError) -> String {
    format!("Invalid page URL '{}': {}", raw.unwrap_or_default(), e)
}
