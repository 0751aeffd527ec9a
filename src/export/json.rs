//! JSON snapshot export backend.
//!
//! Serializes the flat snapshot as-is (columns plus rows in insertion
//! order), matching the `--json` output of the CLI subcommands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{TableExporter, TableSnapshot};

/// Writes the snapshot as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl TableExporter for JsonExporter {
    fn format_name(&self) -> &'static str {
        "JSON snapshot"
    }

    fn export(&self, snapshot: &TableSnapshot, path: &Path) -> Result<()> {
        let body = serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;
        fs::write(path, body)
            .with_context(|| format!("Failed to write JSON snapshot to {}", path.display()))?;
        Ok(())
    }
}
