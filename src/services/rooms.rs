//! Rooms-file loading.
//!
//! The headless subcommands read room definitions from a TOML file:
//!
//! ```toml
//! [[rooms]]
//! name = "Quarto Casal"
//! width = "3,5"
//! length = 4.2
//! type = "Quarto"
//! ```
//!
//! Dimensions may be TOML numbers or strings (strings keep the form's
//! comma-or-dot parsing). Every entry still goes through
//! `RoomLedger::add`, so file input gets the same validation as typed
//! input — absent fields become empty strings and are rejected there,
//! not by the deserializer.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::ledger::RoomLedger;
use crate::models::RoomInput;

/// A parsed rooms file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomsFile {
    /// Room definitions, in file order
    #[serde(default)]
    pub rooms: Vec<RawRoom>,
}

/// One `[[rooms]]` table, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRoom {
    /// Room name
    #[serde(default)]
    pub name: String,
    /// Width in meters (number, or string with comma/dot separator)
    #[serde(default)]
    pub width: RawDimension,
    /// Length in meters (number, or string with comma/dot separator)
    #[serde(default)]
    pub length: RawDimension,
    /// Room-type label
    #[serde(default, rename = "type")]
    pub room_type: String,
}

/// A dimension as written in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDimension {
    /// TOML integer or float
    Number(f64),
    /// String form, comma or dot separator
    Text(String),
}

impl Default for RawDimension {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl RawDimension {
    /// The raw form-field string fed to ledger validation.
    #[must_use]
    pub fn as_field(&self) -> String {
        match self {
            Self::Number(value) => format!("{value}"),
            Self::Text(text) => text.clone(),
        }
    }
}

impl RoomsFile {
    /// Loads and parses a rooms file.
    pub fn load(path: &Path) -> Result<Self> {
        let body = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rooms file {}", path.display()))?;
        toml::from_str(&body)
            .with_context(|| format!("Failed to parse rooms file {}", path.display()))
    }

    /// The file entries as raw form inputs, in file order.
    #[must_use]
    pub fn inputs(&self) -> Vec<RoomInput> {
        self.rooms
            .iter()
            .map(|room| RoomInput {
                name: room.name.clone(),
                width: room.width.as_field(),
                length: room.length.as_field(),
                room_type: room.room_type.clone(),
            })
            .collect()
    }

    /// Feeds every entry through ledger validation, failing on the first
    /// rejected one. Returns the number of entries added.
    pub fn populate(&self, ledger: &mut RoomLedger) -> Result<usize> {
        for (index, input) in self.inputs().iter().enumerate() {
            ledger
                .add(input)
                .with_context(|| format!("Invalid room entry #{}", index + 1))?;
        }
        Ok(self.rooms.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_rooms_file(body: &str) -> (std::path::PathBuf, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        (path, dir)
    }

    #[test]
    fn test_load_accepts_numbers_and_comma_strings() {
        let (path, _dir) = write_rooms_file(
            r#"
[[rooms]]
name = "Quarto"
width = "3,0"
length = 4
type = "Quarto"

[[rooms]]
name = "Banheiro"
width = 2.0
length = 2.0
type = "Banheiro com Chuveiro Elétrico"
"#,
        );

        let file = RoomsFile::load(&path).unwrap();
        let mut ledger = RoomLedger::new();
        assert_eq!(file.populate(&mut ledger).unwrap(), 2);
        assert_eq!(ledger.entries()[0].formatted_area(), "12.00 m²");
        assert_eq!(ledger.entries()[1].gauges.specific, "6.0 mm² (Chuveiro)");
    }

    #[test]
    fn test_missing_field_is_rejected_by_ledger_not_parser() {
        let (path, _dir) = write_rooms_file(
            r#"
[[rooms]]
width = 3.0
length = 4.0
type = "Quarto"
"#,
        );

        let file = RoomsFile::load(&path).unwrap();
        let mut ledger = RoomLedger::new();
        let err = file.populate(&mut ledger).unwrap_err();
        assert!(err.to_string().contains("Invalid room entry #1"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_load_fails_on_missing_file_and_bad_toml() {
        assert!(RoomsFile::load(Path::new("/nonexistent/rooms.toml")).is_err());

        let (path, _dir) = write_rooms_file("rooms = 3");
        assert!(RoomsFile::load(&path).is_err());
    }

    #[test]
    fn test_empty_file_is_an_empty_ledger() {
        let (path, _dir) = write_rooms_file("");
        let file = RoomsFile::load(&path).unwrap();
        let mut ledger = RoomLedger::new();
        assert_eq!(file.populate(&mut ledger).unwrap(), 0);
        assert!(ledger.is_empty());
    }
}
