use contact_form::{
    form::payload::FormPayload,
    submit::outcome::SubmissionOutcome,
    trace::{logger::TraceLogger, trace::TraceEvent},
};
use serde_json::Value;

fn trace_path(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("contact-form-traces-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn trace_event_captures_outcome() {
    let payload = FormPayload::from_entries(vec![("email".to_string(), "a@b.c".to_string())]);
    let event = TraceEvent::now("contactForm", "https://example.com/contact")
        .with_payload(&payload)
        .with_outcome(&SubmissionOutcome::Rejected {
            status: 400,
            error: "Invalid email".into(),
        });

    assert!(event.timestamp_ms > 0);
    assert_eq!(event.field_count, 1);
    assert_eq!(event.payload_fingerprint, Some(payload.fingerprint()));
    assert_eq!(event.outcome.as_deref(), Some("rejected"));
    assert_eq!(event.status, Some(400));

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["display_state"], "failed");
    assert!(!json.to_string().contains("a@b.c"));
}

#[test]
fn logger_appends_one_line_per_event() {
    let path = trace_path("append.jsonl");
    let logger = TraceLogger::open(&path).unwrap();

    logger.log(&TraceEvent::now("contactForm", "/contact"));
    logger.log(
        &TraceEvent::now("contactForm", "/contact").with_outcome(&SubmissionOutcome::TransportFailure {
            cause: "offline".into(),
        }),
    );

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0]["outcome"].is_null());
    assert_eq!(lines[1]["outcome"], "transport_failure");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn reopening_appends_to_existing_trace() {
    let path = trace_path("reopen.jsonl");
    TraceLogger::open(&path)
        .unwrap()
        .log(&TraceEvent::now("contactForm", "/contact"));
    TraceLogger::open(&path)
        .unwrap()
        .log(&TraceEvent::now("bookingForm", "/book"));

    let content = std::fs::read_to_string(&path).unwrap();
    let forms: Vec<String> = content
        .lines()
        .map(|l| serde_json::from_str::<Value>(l).unwrap()["form_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(forms, vec!["contactForm", "bookingForm"]);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn unopenable_trace_file_is_an_error() {
    let result = TraceLogger::open("/nonexistent-dir/for/trace.jsonl");
    assert_eq!(result.err().map(|e| e.kind()), Some(std::io::ErrorKind::NotFound));
}
