//! Export functionality for the room ledger.
//!
//! Backends never see the ledger itself. They consume a [`TableSnapshot`],
//! a flat header-plus-string-rows table, through the [`TableExporter`]
//! trait, so swapping or adding an output format never touches ledger or
//! rule code.

pub mod json;
pub mod pdf;
pub mod xlsx;

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use thiserror::Error;

use crate::constants::SNAPSHOT_COLUMNS;
use crate::models::RoomEntry;

pub use json::JsonExporter;
pub use pdf::PdfExporter;
pub use xlsx::XlsxExporter;

/// Export was requested while the ledger had no rows.
///
/// Surfaced as a warning; no file is created or touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("there is no data to export; add at least one room first")]
pub struct EmptyLedger;

/// Flat, format-independent view of the ledger at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSnapshot {
    /// Column headers, in display order
    pub columns: [&'static str; 6],
    /// One row of cell strings per ledger entry, in insertion order
    pub rows: Vec<[String; 6]>,
}

impl TableSnapshot {
    /// Builds the snapshot from ledger entries, formatting each cell the
    /// way every backend renders it (area at two decimals).
    #[must_use]
    pub fn from_entries(entries: &[RoomEntry]) -> Self {
        let rows = entries
            .iter()
            .map(|entry| {
                [
                    entry.name.clone(),
                    entry.formatted_area(),
                    entry.room_type.clone(),
                    entry.gauges.lighting.to_string(),
                    entry.gauges.outlets.to_string(),
                    entry.gauges.specific.to_string(),
                ]
            })
            .collect();

        Self {
            columns: SNAPSHOT_COLUMNS,
            rows,
        }
    }

    /// True when the snapshot carries no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rejects empty snapshots before any backend runs.
    pub fn require_rows(&self) -> Result<(), EmptyLedger> {
        if self.is_empty() {
            Err(EmptyLedger)
        } else {
            Ok(())
        }
    }
}

/// A rendering backend for the ledger snapshot.
pub trait TableExporter {
    /// Human-readable format name for messages ("spreadsheet", "document", ...).
    fn format_name(&self) -> &'static str;

    /// Renders the snapshot to `path`.
    ///
    /// Callers check [`TableSnapshot::require_rows`] first; backends may
    /// assume at least one row.
    fn export(&self, snapshot: &TableSnapshot, path: &Path) -> Result<()>;
}
