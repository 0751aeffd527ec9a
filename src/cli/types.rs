//! Room-type catalog listing command.

use clap::Args;

use crate::cli::common::{CliError, CliResult};
use crate::models::RoomType;

/// List the room types the entry form offers
#[derive(Debug, Clone, Args)]
pub struct TypesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl TypesArgs {
    /// Execute the types command
    pub fn execute(&self) -> CliResult<()> {
        let labels: Vec<&str> = RoomType::ALL.iter().map(|t| t.label()).collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&labels)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for label in labels {
                println!("{label}");
            }
        }

        Ok(())
    }
}
