//! Gauge recommendation rule.
//!
//! A single lookup over the fixed NBR 5410-inspired sizing table. This is
//! deliberately a static table, not a load calculation; see the README
//! disclaimer.

use crate::constants::{OUTLET_GAUGE, SHOWER_GAUGE};
use crate::models::{GaugeSpec, RoomType};

/// Returns the recommended gauges for a room-type label.
///
/// Total over all inputs: labels outside the catalog fall through to the
/// NBR 5410 minimums (1.5 mm² lighting, 2.5 mm² TUG, no TUE circuit).
#[must_use]
pub fn recommend(room_type: &str) -> GaugeSpec {
    match RoomType::from_label(room_type) {
        Some(RoomType::BanheiroComChuveiro) => GaugeSpec {
            specific: SHOWER_GAUGE,
            ..GaugeSpec::MINIMUMS
        },
        // Kitchens and service areas keep the 2.5 mm² TUG minimum. The
        // sizing table carries them as their own row, so this arm stays
        // separate even though the value matches the default.
        Some(RoomType::Cozinha | RoomType::AreaDeServico) => GaugeSpec {
            outlets: OUTLET_GAUGE,
            ..GaugeSpec::MINIMUMS
        },
        // Remaining catalog rows and unrecognized labels
        Some(_) | None => GaugeSpec::MINIMUMS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rows_get_minimums() {
        for room_type in RoomType::ALL {
            if room_type == RoomType::BanheiroComChuveiro {
                continue;
            }
            let spec = recommend(room_type.label());
            assert_eq!(spec.lighting, "1.5 mm²", "{}", room_type.label());
            assert_eq!(spec.outlets, "2.5 mm²", "{}", room_type.label());
            assert_eq!(spec.specific, "-", "{}", room_type.label());
        }
    }

    #[test]
    fn test_shower_bathroom_gets_dedicated_tue_circuit() {
        let spec = recommend("Banheiro com Chuveiro Elétrico");
        assert_eq!(spec.lighting, "1.5 mm²");
        assert_eq!(spec.outlets, "2.5 mm²");
        assert_eq!(spec.specific, "6.0 mm² (Chuveiro)");
    }

    // Regression guard: the kitchen/service-area row of the sizing table is
    // the TUG minimum on purpose, not a forgotten higher gauge.
    #[test]
    fn test_kitchen_and_service_area_keep_tug_minimum() {
        for label in ["Cozinha", "Área de Serviço"] {
            let spec = recommend(label);
            assert_eq!(spec.outlets, "2.5 mm²", "{label}");
            assert_eq!(spec.specific, "-", "{label}");
        }
    }

    #[test]
    fn test_unrecognized_label_falls_through_to_minimums() {
        assert_eq!(recommend("Porão"), GaugeSpec::MINIMUMS);
        assert_eq!(recommend(""), GaugeSpec::MINIMUMS);
    }
}
