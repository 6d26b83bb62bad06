//! Error types for flowspec
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for flowspec
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Capture Decoding Errors
    // ============================================================================
    #[error("Failed to read capture file '{path}': {message}")]
    CaptureRead { path: String, message: String },

    #[error("Malformed tnetstring at byte {offset}: {message}")]
    Tnetstring { offset: usize, message: String },

    // ============================================================================
    // Merge Framework Errors
    // ============================================================================
    #[error("Cannot merge an empty sequence of {what}")]
    EmptyMerge { what: &'static str },

    #[error("No merger configured for key '{key}'")]
    UnknownMergeKey { key: String },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to serialize document to YAML: {0}")]
    YamlSerialize(#[from] serde_yaml::Error),

    #[error("Failed to serialize document to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a capture-read error
    pub fn capture_read(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CaptureRead {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a tnetstring framing error
    pub fn tnetstring(offset: usize, message: impl Into<String>) -> Self {
        Self::Tnetstring {
            offset,
            message: message.into(),
        }
    }

    /// Create an empty-merge invariant error
    pub fn empty_merge(what: &'static str) -> Self {
        Self::EmptyMerge { what }
    }

    /// Create an unknown-merge-key configuration error
    pub fn unknown_merge_key(key: impl Into<String>) -> Self {
        Self::UnknownMergeKey { key: key.into() }
    }
}

/// Result type alias for flowspec
pub type Result<T> = std::result::Result<T, Error>;
