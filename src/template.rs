//! URL parameterization
//!
//! Detects path segments that look like parameters rather than fixed path
//! components and rewrites the path into a templated form with positional
//! `{paramN}` placeholders.

use crate::openapi::Parameter;
use crate::schema::Schema;
use crate::types::JsonValue;
use regex::Regex;
use std::sync::LazyLock;

/// Canonical 8-4-4-4-12 hexadecimal UUID, case-insensitive
static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

/// Whether a path segment looks like a parameter value.
///
/// Deliberately coarse: decimal integers and UUIDs cover the common ID
/// shapes; everything else is treated as a literal path component.
pub fn is_parameter(segment: &str) -> bool {
    is_digits(segment) || UUID_REGEX.is_match(segment)
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Guess a primitive schema from a raw string value.
///
/// Digit-only strings become numbers with the parsed integer as the typed
/// value; everything else stays a string. Digit strings too large for a JSON
/// integer fall back to the string guess.
pub fn guess_type(raw: &str) -> (Schema, JsonValue) {
    if is_digits(raw) {
        if let Ok(n) = raw.parse::<i64>() {
            return (Schema::number(), JsonValue::from(n));
        }
        if let Ok(n) = raw.parse::<u64>() {
            return (Schema::number(), JsonValue::from(n));
        }
    }
    (Schema::string(), JsonValue::String(raw.to_string()))
}

/// Percent-decode a URL component; undecodable byte sequences degrade lossily
pub fn percent_decode(value: &str) -> String {
    percent_encoding::percent_decode_str(value)
        .decode_utf8_lossy()
        .into_owned()
}

/// Rewrite a path into its templated form and emit a descriptor for every
/// parameter segment.
///
/// Parameter segments are replaced by `{param0}`, `{param1}`, … left to
/// right; the counter only advances over parameter segments. String examples
/// are percent-decoded; numeric examples are used as parsed.
pub fn templatize(path: &str) -> (String, Vec<Parameter>) {
    let mut segments = Vec::new();
    let mut parameters = Vec::new();
    let mut index = 0;

    // The segment before the first '/' is always empty
    for segment in path.split('/').skip(1) {
        if is_parameter(segment) {
            let name = format!("param{index}");
            segments.push(format!("{{{name}}}"));

            let (schema, example) = guess_type(segment);
            let example = match example {
                JsonValue::String(s) => JsonValue::String(percent_decode(&s)),
                other => other,
            };
            parameters.push(Parameter::path(name, schema, example));
            index += 1;
        } else {
            segments.push(segment.to_string());
        }
    }

    (format!("/{}", segments.join("/")), parameters)
}
