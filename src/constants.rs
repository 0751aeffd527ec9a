//! Application-wide constants.
//!
//! Gauge strings and room-type labels are kept verbatim from the NBR 5410
//! minimum-sizing table this tool implements; several of them are
//! Portuguese labels that also appear in exported files.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Bitola";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "bitola";

/// Minimum lighting-circuit gauge (NBR 5410).
pub const LIGHTING_GAUGE: &str = "1.5 mm²";

/// Minimum general-use outlet (TUG) gauge (NBR 5410).
pub const OUTLET_GAUGE: &str = "2.5 mm²";

/// Placeholder shown when a room needs no specific-use (TUE) circuit.
pub const NO_SPECIFIC_CIRCUIT: &str = "-";

/// Dedicated shower circuit gauge. 5500-7800 W showers on 220 V take
/// 4.0 or 6.0 mm²; 6.0 mm² is the safe recommendation.
pub const SHOWER_GAUGE: &str = "6.0 mm² (Chuveiro)";

/// Column headers of the ledger table, in display/export order.
pub const SNAPSHOT_COLUMNS: [&str; 6] = [
    "Room name",
    "Area (m²)",
    "Room type",
    "Lighting gauge",
    "Outlet gauge (TUG)",
    "Specific gauge (TUE)",
];

/// Title line of the exported document.
pub const DOCUMENT_TITLE: &str = "Estimated Residential Electrical Sizing";

/// Closing disclaimer paragraph of the exported document.
pub const DOCUMENT_DISCLAIMER: &str = "IMPORTANT: This is a simplified estimate and does not \
replace a complete electrical design or the review of a qualified professional. All electrical \
work must strictly follow NBR 5410 and be carried out by a certified electrician.";
