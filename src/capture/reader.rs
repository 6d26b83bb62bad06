//! Capture file reader

use super::tnetstring;
use super::types::Flow;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read every flow from a mitmproxy dump file.
///
/// Records that are not complete request/response pairs (errored or aborted
/// flows) are skipped with a warning; malformed framing fails the read.
pub fn read_flows(path: impl AsRef<Path>) -> Result<Vec<Flow>> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .map_err(|e| Error::capture_read(path.display().to_string(), e.to_string()))?;

    let records = tnetstring::parse(&bytes)?;
    debug!(records = records.len(), "Decoded capture records");

    let mut flows = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match Flow::from_value(record) {
            Some(flow) => flows.push(flow),
            None => warn!(index, "Skipping record without a complete request/response pair"),
        }
    }

    Ok(flows)
}
