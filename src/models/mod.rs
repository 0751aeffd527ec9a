//! Data models for rooms, gauge recommendations, and the room ledger rows.
//!
//! Models are independent of any presentation surface; everything the
//! interactive session and the CLI subcommands share lives here.

pub mod gauge;
pub mod room;

// Re-export all model types
pub use gauge::GaugeSpec;
pub use room::{parse_dimension, RoomEntry, RoomInput, RoomType};
