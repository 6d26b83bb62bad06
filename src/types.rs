//! Common types used throughout flowspec
//!
//! Shared type aliases and small helpers used across multiple modules.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type (insertion-ordered, via serde_json's `preserve_order`)
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// HTTP header list as captured: ordered (name, value) pairs, duplicates kept
pub type Headers = Vec<(String, String)>;

// ============================================================================
// HTTP helpers
// ============================================================================

/// HTTP methods whose requests carry a body worth documenting
pub const BODY_METHODS: &[&str] = &["post", "put", "patch"];

/// Case-insensitive header lookup; the first matching header wins
pub fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value_case_insensitive() {
        let headers = vec![
            ("Accept".to_string(), "*/*".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
            ("content-type".to_string(), "text/html".to_string()),
        ];

        assert_eq!(
            header_value(&headers, "content-type"),
            Some("application/json")
        );
        assert_eq!(header_value(&headers, "CONTENT-TYPE"), Some("application/json"));
        assert_eq!(header_value(&headers, "x-missing"), None);
    }

    #[test]
    fn test_body_methods() {
        assert!(BODY_METHODS.contains(&"post"));
        assert!(BODY_METHODS.contains(&"put"));
        assert!(BODY_METHODS.contains(&"patch"));
        assert!(!BODY_METHODS.contains(&"get"));
        assert!(!BODY_METHODS.contains(&"delete"));
    }
}
