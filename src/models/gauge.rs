//! Wire gauge recommendation value type.

use serde::Serialize;

use crate::constants::{LIGHTING_GAUGE, NO_SPECIFIC_CIRCUIT, OUTLET_GAUGE};

/// The three recommended conductor gauges for one room.
///
/// All values come from a fixed sizing table, so the fields are static
/// strings rather than parsed quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GaugeSpec {
    /// Lighting circuit gauge (e.g., "1.5 mm²")
    pub lighting: &'static str,
    /// General-use outlet (TUG) circuit gauge (e.g., "2.5 mm²")
    pub outlets: &'static str,
    /// Specific-use (TUE) circuit gauge, or "-" when none is required
    pub specific: &'static str,
}

impl GaugeSpec {
    /// NBR 5410 minimums with no specific-use circuit.
    pub const MINIMUMS: Self = Self {
        lighting: LIGHTING_GAUGE,
        outlets: OUTLET_GAUGE,
        specific: NO_SPECIFIC_CIRCUIT,
    };
}

impl Default for GaugeSpec {
    fn default() -> Self {
        Self::MINIMUMS
    }
}
