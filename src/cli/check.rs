//! Validation command for rooms files.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::ledger::RoomLedger;
use crate::models::RoomType;
use crate::services::RoomsFile;

/// Validate a rooms file without exporting anything
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Path to the rooms TOML file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CheckMessage {
    /// 1-based entry index in the file
    entry: usize,
    severity: &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
struct CheckResponse {
    valid: bool,
    entries: usize,
    accepted: usize,
    messages: Vec<CheckMessage>,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> CliResult<()> {
        let file = RoomsFile::load(&self.input)
            .map_err(|e| CliError::io(format!("Failed to load rooms file: {e:#}")))?;

        let mut ledger = RoomLedger::new();
        let mut messages = Vec::new();
        let inputs = file.inputs();

        for (index, input) in inputs.iter().enumerate() {
            match ledger.add(input) {
                Ok(entry) => {
                    // Out-of-catalog labels are accepted but worth flagging
                    if RoomType::from_label(&entry.room_type).is_none() {
                        messages.push(CheckMessage {
                            entry: index + 1,
                            severity: "warning",
                            message: format!(
                                "room type '{}' is not in the catalog; NBR 5410 minimums applied",
                                entry.room_type
                            ),
                        });
                    }
                }
                Err(e) => messages.push(CheckMessage {
                    entry: index + 1,
                    severity: "error",
                    message: e.to_string(),
                }),
            }
        }

        let response = CheckResponse {
            valid: ledger.len() == inputs.len(),
            entries: inputs.len(),
            accepted: ledger.len(),
            messages,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for message in &response.messages {
                println!("[{}] entry {}: {}", message.severity, message.entry, message.message);
            }
            println!(
                "{} of {} entries valid",
                response.accepted, response.entries
            );
        }

        if response.valid {
            Ok(())
        } else {
            Err(CliError::validation(format!(
                "{} invalid room entr{}",
                response.entries - response.accepted,
                if response.entries - response.accepted == 1 { "y" } else { "ies" }
            )))
        }
    }
}
