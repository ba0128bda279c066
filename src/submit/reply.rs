use serde_json::{Map, Value};

/// A completed HTTP exchange, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The server's answer, split by HTTP outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerReply {
    Ok { message: Option<String> },
    Err { status: u16, error: Option<String> },
}

impl ServerReply {
    pub fn from_response(response: &RawResponse) -> Self {
        let body = decode_body(&response.body);

        if response.is_success() {
            ServerReply::Ok {
                message: text_field(&body, "message"),
            }
        } else {
            ServerReply::Err {
                status: response.status,
                error: text_field(&body, "error"),
            }
        }
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse a reply body as a JSON object. Empty, malformed and non-object
/// bodies all count as `{}`. A leading byte order mark is skipped.
pub fn decode_body(bytes: &[u8]) -> Map<String, Value> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            tracing::debug!(kind = json_kind(&other), "reply body is not a JSON object");
            Map::new()
        }
        Err(e) => {
            if !bytes.is_empty() {
                tracing::debug!(error = %e, "reply body is not valid JSON");
            }
            Map::new()
        }
    }
}

/// A non-empty string field. Other JSON types are ignored.
fn text_field(body: &Map<String, Value>, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
