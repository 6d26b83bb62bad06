//! CLI arguments and parsing

use crate::schema::RequiredPolicy;
use clap::Parser;
use std::path::PathBuf;

/// Generate an OpenAPI spec from recorded HTTP traffic
#[derive(Parser, Debug)]
#[command(name = "flowspec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Capture file with recorded flows (mitmproxy dump format)
    pub capture: PathBuf,

    /// Output file for the generated spec
    pub output: PathBuf,

    /// Base URL of the captured API, as host plus optional path prefix
    /// without a scheme (e.g. api.example.com/v1). Used to filter captured
    /// traffic and as the declared server URL.
    pub base_url: String,

    /// Output format
    #[arg(short, long, default_value = "yaml")]
    pub format: OutputFormat,

    /// When a merged object property counts as required
    #[arg(long, default_value = "any")]
    pub required: RequiredArg,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// YAML document
    Yaml,
    /// Pretty-printed JSON document
    Json,
}

/// Required-field strictness for merged object schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RequiredArg {
    /// Required if any sample had the key
    Any,
    /// Required only if every sample had the key
    All,
}

impl From<RequiredArg> for RequiredPolicy {
    fn from(arg: RequiredArg) -> Self {
        match arg {
            RequiredArg::Any => RequiredPolicy::AnySample,
            RequiredArg::All => RequiredPolicy::AllSamples,
        }
    }
}
