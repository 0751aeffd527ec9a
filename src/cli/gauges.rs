//! Gauge lookup command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::models::RoomType;
use crate::rules;

/// Print the recommended wire gauges for one room type
#[derive(Debug, Clone, Args)]
pub struct GaugesArgs {
    /// Room-type label (e.g., "Quarto", "Banheiro com Chuveiro Elétrico")
    #[arg(short, long, value_name = "LABEL")]
    pub room_type: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct GaugesResult<'a> {
    room_type: &'a str,
    recognized: bool,
    lighting: &'static str,
    outlets: &'static str,
    specific: &'static str,
}

impl GaugesArgs {
    /// Execute the gauges command
    pub fn execute(&self) -> CliResult<()> {
        let spec = rules::recommend(&self.room_type);
        let result = GaugesResult {
            room_type: self.room_type.trim(),
            recognized: RoomType::from_label(&self.room_type).is_some(),
            lighting: spec.lighting,
            outlets: spec.outlets,
            specific: spec.specific,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Room type: {}", result.room_type);
            if !result.recognized {
                println!("(not in the room-type catalog; NBR 5410 minimums apply)");
            }
            println!("Lighting:       {}", result.lighting);
            println!("Outlets (TUG):  {}", result.outlets);
            println!("Specific (TUE): {}", result.specific);
        }

        Ok(())
    }
}
