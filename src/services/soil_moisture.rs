//! Sensorless soil moisture estimation
//!
//! A simple decay model used when no probe reading is available: assume the
//! field was at capacity after the last irrigation and subtract a weather-
//! and crop-dependent loss per elapsed day.

/// Moisture percentage assumed immediately after an irrigation cycle.
const FIELD_CAPACITY_PCT: f64 = 85.0;

/// Estimate current soil moisture from time since the last irrigation and
/// today's weather. Returns a percentage in [10, 100].
///
/// `days_since_last_irrigation` is floored to 1, so a same-day call reflects
/// one day of drying instead of echoing field capacity.
pub fn estimate_soil_moisture(
    days_since_last_irrigation: u32,
    temperature_c: f64,
    humidity_pct: f64,
    crop: &str,
) -> i32 {
    let days = days_since_last_irrigation.max(1);

    let daily_loss = temperature_c / 8.0 + (100.0 - humidity_pct) / 25.0;
    let total_loss = daily_loss * crop_loss_factor(crop) * days as f64;

    let estimated = FIELD_CAPACITY_PCT - total_loss;
    estimated.round().clamp(10.0, 100.0) as i32
}

/// Relative drying rate per crop. Unknown crops fall back to 1.0.
fn crop_loss_factor(crop: &str) -> f64 {
    match crop.to_ascii_lowercase().as_str() {
        "rice" => 1.2,
        "wheat" => 0.9,
        "corn" => 1.1,
        "sugarcane" => 1.3,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_factor_matching_is_case_insensitive() {
        let lower = estimate_soil_moisture(3, 30.0, 40.0, "rice");
        let upper = estimate_soil_moisture(3, 30.0, 40.0, "RICE");
        assert_eq!(lower, upper);
    }

    #[test]
    fn unknown_crop_uses_default_factor() {
        // daily loss = 30/8 + 60/25 = 6.15; 85 - 6.15*1.0*3 = 66.55 -> 67
        assert_eq!(estimate_soil_moisture(3, 30.0, 40.0, "quinoa"), 67);
    }

    #[test]
    fn zero_days_is_floored_to_one() {
        let zero = estimate_soil_moisture(0, 30.0, 40.0, "wheat");
        let one = estimate_soil_moisture(1, 30.0, 40.0, "wheat");
        assert_eq!(zero, one);
        assert!(zero < 85);
    }
}
