//! Room data structures and dimension parsing.

use serde::Serialize;

use crate::models::GaugeSpec;

/// The fixed room-type catalog offered by the entry form.
///
/// The catalog is closed: every variant maps to a row of the gauge sizing
/// table. Labels typed outside this list are still accepted by the ledger
/// (the original form's type field was an editable dropdown) and take the
/// default gauges via an explicit fallthrough in the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    /// Bedroom
    Quarto,
    /// Living room
    Sala,
    /// Kitchen
    Cozinha,
    /// Bathroom without an electric shower
    Banheiro,
    /// Bathroom with an electric shower (dedicated TUE circuit)
    BanheiroComChuveiro,
    /// Laundry / service area
    AreaDeServico,
    /// Hallway
    Corredor,
    /// Garage
    Garagem,
    /// Outdoor area
    AreaExterna,
}

impl RoomType {
    /// All room types, in the order the entry form lists them.
    pub const ALL: [Self; 9] = [
        Self::Quarto,
        Self::Sala,
        Self::Cozinha,
        Self::Banheiro,
        Self::BanheiroComChuveiro,
        Self::AreaDeServico,
        Self::Corredor,
        Self::Garagem,
        Self::AreaExterna,
    ];

    /// The user-facing label (also the value stored in ledger rows).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quarto => "Quarto",
            Self::Sala => "Sala",
            Self::Cozinha => "Cozinha",
            Self::Banheiro => "Banheiro",
            Self::BanheiroComChuveiro => "Banheiro com Chuveiro Elétrico",
            Self::AreaDeServico => "Área de Serviço",
            Self::Corredor => "Corredor",
            Self::Garagem => "Garagem",
            Self::AreaExterna => "Área Externa",
        }
    }

    /// Parses a label back into a catalog entry.
    ///
    /// Returns `None` for labels outside the catalog so callers decide the
    /// fallthrough themselves instead of getting a silent default.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.label() == label.trim())
    }
}

/// Parses a width/length field into a positive dimension in meters.
///
/// Accepts both decimal separators ("3.5" and "3,5"). Returns `None` for
/// anything non-numeric, non-finite, or not strictly positive.
#[must_use]
pub fn parse_dimension(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        _ => None,
    }
}

/// Raw form fields for one room, exactly as the user typed them.
///
/// Validation happens in `RoomLedger::add`, not here, so the interactive
/// session and the rooms-file loader share one validation path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomInput {
    /// Room name (free text)
    pub name: String,
    /// Width in meters, decimal comma or dot
    pub width: String,
    /// Length in meters, decimal comma or dot
    pub length: String,
    /// Room-type label (normally one of `RoomType::ALL`)
    pub room_type: String,
}

/// One accepted row of the room ledger.
///
/// Entries are immutable once created; the ledger only appends and clears.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomEntry {
    /// Room name
    pub name: String,
    /// Width in meters
    pub width: f64,
    /// Length in meters
    pub length: f64,
    /// Floor area in square meters, stored unrounded
    pub area: f64,
    /// Room-type label as entered
    pub room_type: String,
    /// Recommended gauges for this room
    pub gauges: GaugeSpec,
}

impl RoomEntry {
    /// Area formatted for display and export ("12.00 m²").
    #[must_use]
    pub fn formatted_area(&self) -> String {
        format!("{:.2} m²", self.area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_nine_labels_in_form_order() {
        let labels: Vec<_> = RoomType::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), 9);
        assert_eq!(labels[0], "Quarto");
        assert_eq!(labels[4], "Banheiro com Chuveiro Elétrico");
        assert_eq!(labels[8], "Área Externa");
    }

    #[test]
    fn test_from_label_round_trips_every_variant() {
        for room_type in RoomType::ALL {
            assert_eq!(RoomType::from_label(room_type.label()), Some(room_type));
        }
    }

    #[test]
    fn test_from_label_rejects_unknown_and_trims() {
        assert_eq!(RoomType::from_label("Sótão"), None);
        assert_eq!(RoomType::from_label("  Cozinha "), Some(RoomType::Cozinha));
    }

    #[test]
    fn test_parse_dimension_accepts_comma_and_dot() {
        assert_eq!(parse_dimension("3.5"), Some(3.5));
        assert_eq!(parse_dimension("3,5"), Some(3.5));
        assert_eq!(parse_dimension(" 4 "), Some(4.0));
    }

    #[test]
    fn test_parse_dimension_rejects_non_positive_and_garbage() {
        assert_eq!(parse_dimension("0"), None);
        assert_eq!(parse_dimension("-1"), None);
        assert_eq!(parse_dimension("abc"), None);
        assert_eq!(parse_dimension(""), None);
        assert_eq!(parse_dimension("NaN"), None);
        assert_eq!(parse_dimension("inf"), None);
    }

    #[test]
    fn test_formatted_area_rounds_to_two_decimals() {
        let entry = RoomEntry {
            name: "Quarto".to_string(),
            width: 3.33,
            length: 3.0,
            area: 9.99,
            room_type: "Quarto".to_string(),
            gauges: GaugeSpec::MINIMUMS,
        };
        assert_eq!(entry.formatted_area(), "9.99 m²");
    }
}
