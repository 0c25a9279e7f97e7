//! Per-planting water requirement sizing
//!
//! A base daily rate per crop adjusted for soil texture and the day's
//! temperature, totalled over the plant count and converted to a run time at
//! the manual-controller flow rate.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{SoilType, WaterRequirement};

/// Manual-controller flow rate, litres per minute. Shared with the
/// irrigation control collaborator so sized durations match real run time.
pub const FLOW_RATE_LPM: u32 = 5;

/// Size daily watering for a planting: volume per plant, total volume, and
/// the equivalent run time at [`FLOW_RATE_LPM`], rounded up to whole
/// minutes.
///
/// Unlisted crops fall back to the default base rate; there are no error
/// paths.
pub fn calculate_water_requirement(
    crop: &str,
    soil: SoilType,
    plant_count: u32,
    temperature_c: Decimal,
) -> WaterRequirement {
    let per_plant = base_water_rate(crop) * soil_factor(soil) * temperature_factor(temperature_c);
    let total = per_plant * Decimal::from(plant_count);

    let duration_minutes = (total / Decimal::from(FLOW_RATE_LPM))
        .ceil()
        .to_u32()
        .unwrap_or(u32::MAX);

    WaterRequirement {
        per_plant_liters: per_plant,
        total_liters: total,
        duration_minutes,
    }
}

/// Daily base water requirement per plant in litres.
fn base_water_rate(crop: &str) -> Decimal {
    match crop.to_ascii_lowercase().as_str() {
        "tomato" | "brinjal" | "chili" => Decimal::new(15, 1),
        "banana" | "papaya" => Decimal::new(80, 1),
        "flower plants" => Decimal::ONE,
        "millet" | "wheat" => Decimal::new(7, 1),
        _ => Decimal::ONE,
    }
}

/// Infiltration adjustment per soil texture.
fn soil_factor(soil: SoilType) -> Decimal {
    match soil {
        SoilType::Clay => Decimal::new(8, 1),
        SoilType::Loamy => Decimal::ONE,
        SoilType::Sandy => Decimal::new(12, 1),
    }
}

/// Demand adjustment for the day's temperature bracket.
fn temperature_factor(temperature_c: Decimal) -> Decimal {
    if temperature_c < Decimal::from(25) {
        Decimal::new(8, 1)
    } else if temperature_c <= Decimal::from(32) {
        Decimal::ONE
    } else if temperature_c <= Decimal::from(38) {
        Decimal::new(12, 1)
    } else {
        Decimal::new(14, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn temperature_brackets_have_inclusive_boundaries() {
        assert_eq!(temperature_factor(dec("24.9")), dec("0.8"));
        assert_eq!(temperature_factor(dec("25")), dec("1.0"));
        assert_eq!(temperature_factor(dec("32")), dec("1.0"));
        assert_eq!(temperature_factor(dec("32.1")), dec("1.2"));
        assert_eq!(temperature_factor(dec("38")), dec("1.2"));
        assert_eq!(temperature_factor(dec("38.1")), dec("1.4"));
    }

    #[test]
    fn crop_rate_matching_is_case_insensitive() {
        assert_eq!(base_water_rate("Tomato"), base_water_rate("tomato"));
        assert_eq!(base_water_rate("BANANA"), dec("8.0"));
    }

    #[test]
    fn unlisted_crop_defaults_to_one_litre() {
        assert_eq!(base_water_rate("Cabbage"), Decimal::ONE);
    }
}
