// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # flowspec
//!
//! Generate OpenAPI specs from recorded HTTP traffic.
//!
//! Point it at a mitmproxy capture file and a base URL and it reconstructs a
//! structural API description: templated paths, parameter descriptors, and
//! request/response schemas generalized over every recorded sample.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ capture   tnetstring dump → decoded Flow records                │
//! └───────────────────────────────┬─────────────────────────────────┘
//!                                 │ per flow
//! ┌───────────────────────────────┴─────────────────────────────────┐
//! │ openapi::build_path_item                                        │
//! │   template + schema  →  single-sample Path Item                 │
//! │   (template.rs: {paramN} detection, schema: value inference)    │
//! └───────────────────────────────┬─────────────────────────────────┘
//!                                 │ fold
//! ┌───────────────────────────────┴─────────────────────────────────┐
//! │ openapi::SpecAssembler                                          │
//! │   group by template, merge (merge combinators + schema algebra) │
//! │   → Document                                                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flowspec::capture::read_flows;
//! use flowspec::openapi::SpecAssembler;
//!
//! fn main() -> flowspec::Result<()> {
//!     let flows = read_flows("flows.bin")?;
//!
//!     let mut assembler = SpecAssembler::new("api.example.com");
//!     for flow in &flows {
//!         assembler.add(flow);
//!     }
//!
//!     let document = assembler.finish()?;
//!     println!("{}", serde_yaml::to_string(&document)?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Merge-function combinators
pub mod merge;

/// Schema inference and the merge algebra
pub mod schema;

/// URL parameterization
pub mod template;

/// Capture file decoding (mitmproxy dump / tnetstring)
pub mod capture;

/// OpenAPI model, path item building, spec assembly
pub mod openapi;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export the main entry points
pub use capture::read_flows;
pub use openapi::{Document, SpecAssembler};
pub use schema::{infer_schema, merge_schemas, RequiredPolicy, Schema};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
