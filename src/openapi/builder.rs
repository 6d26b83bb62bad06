//! Single-sample path item builder
//!
//! Turns one decoded flow into a templated URL plus a path item scoped to
//! exactly one method and one status code. Generalization across samples
//! happens later, by merging.

use super::types::{MediaTypeObject, Operation, Parameter, PathItem, RequestBody, ResponseObject};
use crate::capture::Flow;
use crate::schema::{infer_schema_with, RequiredPolicy};
use crate::template::{guess_type, percent_decode, templatize};
use crate::types::{JsonObject, JsonValue, BODY_METHODS};
use indexmap::IndexMap;

/// What building a path item from one flow produced
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    /// The flow belongs to the API: its templated URL and single-sample item
    Matched { template: String, item: PathItem },
    /// The flow is outside the declared base; carries the URL prefix that
    /// did not match, for diagnostics
    Foreign { prefix: String },
}

/// Build a single-sample path item from one flow.
///
/// `base` is the API base as host plus optional path prefix, without a
/// scheme (e.g. `api.example.com/v2`).
pub fn build_path_item(flow: &Flow, base: &str, policy: RequiredPolicy) -> BuildOutcome {
    let url = format!("{}{}", flow.request.host, flow.request.path);

    let Some(rest) = strip_base(&url, base) else {
        return BuildOutcome::Foreign {
            prefix: foreign_prefix(&url, base),
        };
    };

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let (template, path_params) = templatize(path);

    let method = flow.request.method.to_lowercase();
    let has_body = BODY_METHODS.contains(&method.as_str());

    let (response_value, response_type) =
        decode_body(&flow.response.content, content_type(flow.response.header("Content-Type")));

    let mut responses = IndexMap::new();
    responses.insert(
        flow.response.status_code.to_string(),
        ResponseObject {
            description: flow.response.reason.clone(),
            content: media_content(response_type, response_value, policy),
        },
    );

    let request_body = has_body.then(|| {
        let (value, media_type) =
            decode_body(&flow.request.content, content_type(flow.request.header("Content-Type")));
        RequestBody {
            description: None,
            content: media_content(media_type, value, policy),
        }
    });

    let parameters = query
        .filter(|q| !q.is_empty())
        .map(query_parameters)
        .unwrap_or_default();

    let operation = Operation {
        responses,
        request_body,
        parameters,
    };

    let mut operations = IndexMap::new();
    operations.insert(method, operation);

    BuildOutcome::Matched {
        template,
        item: PathItem {
            operations,
            parameters: path_params,
        },
    }
}

/// The URL with the base removed, provided the remainder starts a new path
/// segment.
fn strip_base<'a>(url: &'a str, base: &str) -> Option<&'a str> {
    url.strip_prefix(base).filter(|rest| rest.starts_with('/'))
}

/// The part of a non-matching URL comparable to the base: its first
/// `slash-count(base) + 1` segments.
fn foreign_prefix(url: &str, base: &str) -> String {
    let segments = base.matches('/').count() + 1;
    url.split('/').take(segments).collect::<Vec<_>>().join("/")
}

/// Declared media type: default `text/plain`, parameters after `;` stripped
fn content_type(header: Option<&str>) -> String {
    let raw = header.unwrap_or("text/plain");
    match raw.split_once(';') {
        Some((media_type, _)) => media_type.to_string(),
        None => raw.to_string(),
    }
}

/// Decode a body to a JSON-shaped value.
///
/// JSON parses win regardless of the declared type and re-type the body as
/// `application/json`. Form-encoded bodies become flat string-keyed maps
/// (values stay strings). Everything else falls back to the raw text under
/// its declared type.
fn decode_body(content: &str, declared: String) -> (JsonValue, String) {
    if let Ok(value) = serde_json::from_str::<JsonValue>(content) {
        return (value, "application/json".to_string());
    }

    if declared == "application/x-www-form-urlencoded" {
        let mut form = JsonObject::new();
        for pair in content.split('&') {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            form.insert(name.to_string(), JsonValue::String(value.to_string()));
        }
        return (JsonValue::Object(form), declared);
    }

    (JsonValue::String(content.to_string()), declared)
}

fn media_content(
    media_type: String,
    value: JsonValue,
    policy: RequiredPolicy,
) -> IndexMap<String, MediaTypeObject> {
    let mut content = IndexMap::new();
    content.insert(
        media_type,
        MediaTypeObject {
            schema: infer_schema_with(&value, policy),
            example: value,
        },
    );
    content
}

/// Parse the query string into parameter descriptors: split on `&`, split
/// each pair on the first `=` (no `=` means an empty value), percent-decode
/// both halves, guess a primitive type for the value.
fn query_parameters(query: &str) -> Vec<Parameter> {
    query
        .split('&')
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let name = percent_decode(name);
            let value = percent_decode(value);
            let (schema, example) = guess_type(&value);
            Parameter::query(name, schema, example)
        })
        .collect()
}
