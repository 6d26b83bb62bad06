//! tnetstring codec
//!
//! The wire format of mitmproxy dump files. Each value is framed as
//! `<length>:<payload><tag>` with an ASCII decimal length and a one-byte
//! type tag: `,` byte string, `#` integer, `^` float, `!` boolean, `~` null,
//! `]` list, `}` dict.
//!
//! Decoding goes straight to [`JsonValue`]: byte strings become UTF-8 text
//! (undecodable payloads become the empty string, since they are almost
//! certainly binary bodies), dict keys decode lossily.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// Parse every concatenated top-level value in `bytes`.
pub fn parse(bytes: &[u8]) -> Result<Vec<JsonValue>> {
    parse_sequence(bytes, 0)
}

/// Parse a single value, returning it along with the unconsumed remainder.
pub fn parse_one(bytes: &[u8]) -> Result<(JsonValue, &[u8])> {
    parse_value(bytes, 0).map(|(value, rest, _)| (value, rest))
}

fn parse_sequence(bytes: &[u8], base: usize) -> Result<Vec<JsonValue>> {
    let mut values = Vec::new();
    let mut rest = bytes;
    let mut offset = base;
    while !rest.is_empty() {
        let (value, tail, consumed) = parse_value(rest, offset)?;
        values.push(value);
        rest = tail;
        offset += consumed;
    }
    Ok(values)
}

/// Parse one framed value at `offset` (offset is only used for diagnostics).
/// Returns the value, the remaining input, and the number of bytes consumed.
fn parse_value(input: &[u8], offset: usize) -> Result<(JsonValue, &[u8], usize)> {
    let colon = input
        .iter()
        .position(|&b| b == b':')
        .ok_or_else(|| Error::tnetstring(offset, "missing ':' separator"))?;

    let length: usize = std::str::from_utf8(&input[..colon])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| Error::tnetstring(offset, "invalid length prefix"))?;

    let payload_start = colon + 1;
    let payload_end = payload_start + length;
    if input.len() <= payload_end {
        return Err(Error::tnetstring(offset, "truncated payload"));
    }

    let payload = &input[payload_start..payload_end];
    let tag = input[payload_end];
    let consumed = payload_end + 1;
    let rest = &input[consumed..];

    let value = match tag {
        b',' => JsonValue::String(decode_text(payload)),
        b'#' => {
            let n: i64 = std::str::from_utf8(payload)
                .ok()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| Error::tnetstring(offset, "invalid integer payload"))?;
            JsonValue::from(n)
        }
        b'^' => {
            let n: f64 = std::str::from_utf8(payload)
                .ok()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| Error::tnetstring(offset, "invalid float payload"))?;
            serde_json::Number::from_f64(n)
                .map(JsonValue::Number)
                .ok_or_else(|| Error::tnetstring(offset, "non-finite float payload"))?
        }
        b'!' => match payload {
            b"true" => JsonValue::Bool(true),
            b"false" => JsonValue::Bool(false),
            _ => return Err(Error::tnetstring(offset, "invalid boolean payload")),
        },
        b'~' => {
            if !payload.is_empty() {
                return Err(Error::tnetstring(offset, "null with non-empty payload"));
            }
            JsonValue::Null
        }
        b']' => JsonValue::Array(parse_sequence(payload, offset + payload_start)?),
        b'}' => JsonValue::Object(parse_dict(payload, offset + payload_start)?),
        other => {
            return Err(Error::tnetstring(
                offset,
                format!("unknown type tag '{}'", other as char),
            ))
        }
    };

    Ok((value, rest, consumed))
}

fn parse_dict(bytes: &[u8], base: usize) -> Result<JsonObject> {
    let mut object = JsonObject::new();
    let mut rest = bytes;
    let mut offset = base;
    while !rest.is_empty() {
        let (key, tail, consumed) = parse_value(rest, offset)?;
        let key = match key {
            JsonValue::String(s) => s,
            _ => return Err(Error::tnetstring(offset, "dict key is not a string")),
        };
        offset += consumed;
        if tail.is_empty() {
            return Err(Error::tnetstring(offset, "dict key without a value"));
        }
        let (value, tail, consumed) = parse_value(tail, offset)?;
        offset += consumed;
        rest = tail;
        object.insert(key, value);
    }
    Ok(object)
}

/// Best-effort text decoding; binary payloads degrade to the empty string
fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).unwrap_or_default()
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode a value as a tnetstring. The inverse of [`parse_one`] for values
/// that survived text decoding; used mainly to build capture fixtures.
pub fn dump(value: &JsonValue) -> Vec<u8> {
    match value {
        JsonValue::Null => frame(b"", b'~'),
        JsonValue::Bool(true) => frame(b"true", b'!'),
        JsonValue::Bool(false) => frame(b"false", b'!'),
        JsonValue::Number(n) => {
            if n.is_f64() {
                frame(n.to_string().as_bytes(), b'^')
            } else {
                frame(n.to_string().as_bytes(), b'#')
            }
        }
        JsonValue::String(s) => frame(s.as_bytes(), b','),
        JsonValue::Array(items) => {
            let mut payload = Vec::new();
            for item in items {
                payload.extend(dump(item));
            }
            frame(&payload, b']')
        }
        JsonValue::Object(map) => {
            let mut payload = Vec::new();
            for (key, item) in map {
                payload.extend(frame(key.as_bytes(), b','));
                payload.extend(dump(item));
            }
            frame(&payload, b'}')
        }
    }
}

fn frame(payload: &[u8], tag: u8) -> Vec<u8> {
    let mut framed = format!("{}:", payload.len()).into_bytes();
    framed.extend_from_slice(payload);
    framed.push(tag);
    framed
}
