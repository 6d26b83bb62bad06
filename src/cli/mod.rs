//! CLI module
//!
//! Command-line interface for converting a capture file into a spec.

mod commands;
mod runner;

pub use commands::{Cli, OutputFormat, RequiredArg};
pub use runner::Runner;
