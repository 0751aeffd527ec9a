//! The room ledger: the ordered, in-memory collection of accepted rooms.

use thiserror::Error;

use crate::export::TableSnapshot;
use crate::models::{parse_dimension, RoomEntry, RoomInput};
use crate::rules;

/// Why an entry was rejected by [`RoomLedger::add`].
///
/// Rejections never change the ledger; the caller reports the message and
/// lets the user retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A required form field was left blank.
    #[error("required field is empty: {field}")]
    MissingField {
        /// Which field was blank ("name", "width", "length", "room type")
        field: &'static str,
    },
    /// A dimension field did not parse as a positive number.
    #[error("{field} must be a positive number, got '{value}'")]
    InvalidNumber {
        /// Which dimension was bad ("width" or "length")
        field: &'static str,
        /// The rejected raw input
        value: String,
    },
}

/// Insertion-ordered collection of room entries.
///
/// Entries are immutable once accepted. The only mutations are appending a
/// validated entry and clearing the whole ledger; there is no per-row
/// delete.
#[derive(Debug, Clone, Default)]
pub struct RoomLedger {
    entries: Vec<RoomEntry>,
}

impl RoomLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Validates raw form input and appends the resulting entry.
    ///
    /// On success the area is computed from the parsed dimensions, the
    /// gauge rule is applied, and a reference to the accepted entry is
    /// returned so callers can echo it. On failure the ledger is unchanged.
    pub fn add(&mut self, input: &RoomInput) -> Result<&RoomEntry, LedgerError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(LedgerError::MissingField { field: "name" });
        }
        if input.width.trim().is_empty() {
            return Err(LedgerError::MissingField { field: "width" });
        }
        if input.length.trim().is_empty() {
            return Err(LedgerError::MissingField { field: "length" });
        }
        let room_type = input.room_type.trim();
        if room_type.is_empty() {
            return Err(LedgerError::MissingField { field: "room type" });
        }

        let width = parse_dimension(&input.width).ok_or_else(|| LedgerError::InvalidNumber {
            field: "width",
            value: input.width.trim().to_string(),
        })?;
        let length = parse_dimension(&input.length).ok_or_else(|| LedgerError::InvalidNumber {
            field: "length",
            value: input.length.trim().to_string(),
        })?;

        self.entries.push(RoomEntry {
            name: name.to_string(),
            width,
            length,
            area: width * length,
            room_type: room_type.to_string(),
            gauges: rules::recommend(room_type),
        });

        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Removes all entries. Idempotent.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The accepted entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[RoomEntry] {
        &self.entries
    }

    /// Number of accepted entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry has been accepted (or after a clear).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flat table snapshot of the current ledger (see `export` module).
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::from_entries(&self.entries)
    }
}
