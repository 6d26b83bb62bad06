//! Tests for capture decoding

use super::tnetstring::{dump, parse, parse_one};
use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// tnetstring Tests
// ============================================================================

#[test]
fn test_parse_scalars() {
    assert_eq!(parse_one(b"5:hello,").unwrap().0, json!("hello"));
    assert_eq!(parse_one(b"2:42#").unwrap().0, json!(42));
    assert_eq!(parse_one(b"2:-7#").unwrap().0, json!(-7));
    assert_eq!(parse_one(b"4:2.25^").unwrap().0, json!(2.25));
    assert_eq!(parse_one(b"4:true!").unwrap().0, json!(true));
    assert_eq!(parse_one(b"5:false!").unwrap().0, json!(false));
    assert_eq!(parse_one(b"0:~").unwrap().0, json!(null));
}

#[test]
fn test_parse_list_and_dict() {
    // ["a", 1]
    assert_eq!(parse_one(b"8:1:a,1:1#]").unwrap().0, json!(["a", 1]));

    // {"k": "v"}
    assert_eq!(parse_one(b"8:1:k,1:v,}").unwrap().0, json!({"k": "v"}));
}

#[test]
fn test_parse_concatenated_top_level_values() {
    let values = parse(b"1:a,1:b,0:~").unwrap();
    assert_eq!(values, vec![json!("a"), json!("b"), json!(null)]);
}

#[test]
fn test_parse_leaves_remainder() {
    let (value, rest) = parse_one(b"1:a,1:b,").unwrap();
    assert_eq!(value, json!("a"));
    assert_eq!(rest, b"1:b,");
}

#[test]
fn test_parse_binary_payload_degrades_to_empty_string() {
    let (value, _) = parse_one(b"2:\xff\xfe,").unwrap();
    assert_eq!(value, json!(""));
}

#[test]
fn test_parse_malformed_framing() {
    assert!(matches!(
        parse_one(b"notanumber"),
        Err(Error::Tnetstring { .. })
    ));
    assert!(matches!(parse_one(b"5:ab,"), Err(Error::Tnetstring { .. })));
    assert!(matches!(parse_one(b"2:ab?"), Err(Error::Tnetstring { .. })));
}

#[test]
fn test_dump_parse_round_trip() {
    let value = json!({
        "request": {
            "host": "api.example.com",
            "headers": [["Content-Type", "application/json"]],
            "port": 443,
            "secure": true,
            "note": null
        },
        "sizes": [1, 2, 3]
    });

    let encoded = dump(&value);
    let (decoded, rest) = parse_one(&encoded).unwrap();
    assert_eq!(decoded, value);
    assert!(rest.is_empty());
}

// ============================================================================
// Flow Extraction Tests
// ============================================================================

fn sample_record() -> serde_json::Value {
    json!({
        "type": "http",
        "request": {
            "host": "api.example.com",
            "path": "/users/1",
            "method": "GET",
            "headers": [["Accept", "*/*"], ["Content-Type", "application/json"]],
            "content": ""
        },
        "response": {
            "status_code": 200,
            "reason": "OK",
            "headers": [["Content-Type", "application/json"]],
            "content": "{\"id\": 1}"
        }
    })
}

#[test]
fn test_flow_from_value() {
    let flow = Flow::from_value(&sample_record()).unwrap();

    assert_eq!(flow.request.host, "api.example.com");
    assert_eq!(flow.request.path, "/users/1");
    assert_eq!(flow.request.method, "GET");
    assert_eq!(flow.request.header("accept"), Some("*/*"));
    assert_eq!(flow.response.status_code, 200);
    assert_eq!(flow.response.reason, "OK");
    assert_eq!(flow.response.content, "{\"id\": 1}");
}

#[test]
fn test_flow_without_response_is_skipped() {
    let record = json!({
        "request": {"host": "h", "path": "/", "method": "GET", "headers": [], "content": ""}
    });
    assert!(Flow::from_value(&record).is_none());
}

#[test]
fn test_flow_defaults_for_missing_optional_fields() {
    let record = json!({
        "request": {"host": "h", "path": "/", "method": "GET"},
        "response": {"status_code": 204}
    });

    let flow = Flow::from_value(&record).unwrap();
    assert!(flow.request.headers.is_empty());
    assert_eq!(flow.request.content, "");
    assert_eq!(flow.response.reason, "");
}

// ============================================================================
// Reader Tests
// ============================================================================

#[test]
fn test_read_flows_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&dump(&sample_record())).unwrap();
    // A record without a response is skipped, not fatal
    file.write_all(&dump(&json!({"type": "error"}))).unwrap();
    file.write_all(&dump(&sample_record())).unwrap();
    file.flush().unwrap();

    let flows = read_flows(file.path()).unwrap();
    assert_eq!(flows.len(), 2);
    assert_eq!(flows[0].request.host, "api.example.com");
}

#[test]
fn test_read_flows_missing_file() {
    let result = read_flows("/nonexistent/flows.bin");
    assert!(matches!(result, Err(Error::CaptureRead { .. })));
}
