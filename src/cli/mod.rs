//! CLI command handlers.
//!
//! This module provides headless, scriptable access to the ledger, the
//! gauge rule, and the exporters for automation, testing, and CI use. All
//! commands route through the same logic layer as the interactive session.

pub mod check;
pub mod common;
pub mod export;
pub mod gauges;
pub mod types;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use export::{ExportArgs, ExportFormat};
pub use gauges::GaugesArgs;
pub use types::TypesArgs;
