//! Service layer coordinating file input with the ledger.

pub mod rooms;

// Re-export commonly used types and functions
pub use rooms::RoomsFile;
