//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every helper

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A two-room fixture: a bedroom and a shower bathroom.
pub const ROOMS_BASIC: &str = r#"
[[rooms]]
name = "Quarto"
width = 3
length = 4
type = "Quarto"

[[rooms]]
name = "Banheiro"
width = 2
length = 2
type = "Banheiro com Chuveiro Elétrico"
"#;

/// A fixture with one invalid entry (negative width) between valid ones.
pub const ROOMS_WITH_BAD_WIDTH: &str = r#"
[[rooms]]
name = "Sala"
width = 5
length = 4
type = "Sala"

[[rooms]]
name = "Corredor"
width = -1
length = 4
type = "Corredor"
"#;

/// A fixture whose second entry has no name.
pub const ROOMS_WITH_MISSING_NAME: &str = r#"
[[rooms]]
name = "Garagem"
width = 5
length = 6
type = "Garagem"

[[rooms]]
width = 2
length = 2
type = "Banheiro"
"#;

/// Writes a rooms file into a fresh temp dir. Keep the `TempDir` alive for
/// the duration of the test.
pub fn create_temp_rooms_file(body: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("rooms.toml");
    fs::write(&path, body).expect("Failed to write rooms file");
    (path, dir)
}
