//! Decoded flow record types

use crate::types::{header_value, Headers, JsonValue};

/// One recorded request/response exchange
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    pub request: FlowRequest,
    pub response: FlowResponse,
}

/// The request half of a flow
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRequest {
    pub host: String,
    pub path: String,
    pub method: String,
    pub headers: Headers,
    pub content: String,
}

/// The response half of a flow
#[derive(Debug, Clone, PartialEq)]
pub struct FlowResponse {
    pub status_code: u16,
    pub reason: String,
    pub headers: Headers,
    pub content: String,
}

impl FlowRequest {
    /// Case-insensitive header lookup; the first matching header wins
    pub fn header(&self, name: &str) -> Option<&str> {
        header_value(&self.headers, name)
    }
}

impl FlowResponse {
    /// Case-insensitive header lookup; the first matching header wins
    pub fn header(&self, name: &str) -> Option<&str> {
        header_value(&self.headers, name)
    }
}

impl Flow {
    /// Extract a flow from one decoded capture record.
    ///
    /// Returns `None` when the record has no usable request/response pair
    /// (mitmproxy dumps also contain errored flows); headers, bodies and the
    /// reason phrase default to empty when absent.
    pub fn from_value(record: &JsonValue) -> Option<Self> {
        let request = record.get("request")?;
        let response = record.get("response")?;

        let request = FlowRequest {
            host: str_field(request, "host")?,
            path: str_field(request, "path")?,
            method: str_field(request, "method")?,
            headers: headers_field(request),
            content: str_field(request, "content").unwrap_or_default(),
        };

        let status_code = response
            .get("status_code")
            .and_then(JsonValue::as_u64)
            .and_then(|code| u16::try_from(code).ok())?;

        let response = FlowResponse {
            status_code,
            reason: str_field(response, "reason").unwrap_or_default(),
            headers: headers_field(response),
            content: str_field(response, "content").unwrap_or_default(),
        };

        Some(Self { request, response })
    }
}

fn str_field(value: &JsonValue, field: &str) -> Option<String> {
    value.get(field)?.as_str().map(String::from)
}

/// Headers arrive as a list of `[name, value]` pairs; anything else is
/// ignored
fn headers_field(value: &JsonValue) -> Headers {
    let Some(entries) = value.get("headers").and_then(JsonValue::as_array) else {
        return Headers::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let pair = entry.as_array()?;
            let name = pair.first()?.as_str()?;
            let value = pair.get(1)?.as_str()?;
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}
