//! CLI runner - executes the conversion

use crate::capture::read_flows;
use crate::cli::commands::{Cli, OutputFormat};
use crate::error::Result;
use crate::openapi::SpecAssembler;
use std::fs;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the conversion: read the capture, assemble the spec, write it out
    pub fn run(&self) -> Result<()> {
        let flows = read_flows(&self.cli.capture)?;
        info!(flows = flows.len(), "Loaded capture");

        let mut assembler =
            SpecAssembler::new(&self.cli.base_url).with_required_policy(self.cli.required.into());
        for flow in &flows {
            assembler.add(flow);
        }

        let skipped = assembler.foreign_prefixes().count();
        let accepted = assembler.sample_count();
        let document = assembler.finish()?;
        info!(
            paths = document.paths.len(),
            accepted, skipped, "Assembled spec"
        );

        let text = match self.cli.format {
            OutputFormat::Yaml => serde_yaml::to_string(&document)?,
            OutputFormat::Json => serde_json::to_string_pretty(&document)?,
        };
        fs::write(&self.cli.output, text)?;
        info!(output = %self.cli.output.display(), "Wrote spec");

        Ok(())
    }
}
