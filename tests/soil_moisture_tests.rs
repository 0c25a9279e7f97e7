//! Soil moisture estimator tests
//!
//! Covers the hardware-free decay model:
//! - Output bounds and rounding
//! - Monotonic drying over elapsed days
//! - Per-crop loss factors

use proptest::prelude::*;

use farm_irrigation_engine::estimate_soil_moisture;

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// One mild day leaves the field close to capacity.
    #[test]
    fn test_single_mild_day() {
        // daily loss = 20/8 + (100-80)/25 = 3.3; wheat factor 0.9 gives
        // 85 - 2.97 = 82.03 -> 82
        assert_eq!(estimate_soil_moisture(1, 20.0, 80.0, "wheat"), 82);
    }

    /// Hot dry spells drain the estimate quickly.
    #[test]
    fn test_hot_dry_spell() {
        // daily loss = 40/8 + 90/25 = 8.6; sugarcane factor 1.3 over 5 days
        // = 55.9; 85 - 55.9 = 29.1 -> 29
        assert_eq!(estimate_soil_moisture(5, 40.0, 10.0, "sugarcane"), 29);
    }

    /// The estimate never drops below the 10% floor.
    #[test]
    fn test_lower_clamp() {
        assert_eq!(estimate_soil_moisture(60, 45.0, 5.0, "sugarcane"), 10);
    }

    /// Sub-zero temperatures can push the raw estimate above capacity; the
    /// 100% ceiling applies.
    #[test]
    fn test_upper_clamp() {
        // daily loss = -40/8 + 0 = -5 per day; 85 + 20 = 105 -> 100
        assert_eq!(estimate_soil_moisture(4, -40.0, 100.0, "wheat"), 100);
    }

    /// Wheat dries slower than rice under identical weather.
    #[test]
    fn test_crop_factors_order_estimates() {
        let wheat = estimate_soil_moisture(4, 30.0, 50.0, "wheat");
        let rice = estimate_soil_moisture(4, 30.0, 50.0, "rice");
        let sugarcane = estimate_soil_moisture(4, 30.0, 50.0, "sugarcane");
        assert!(wheat > rice);
        assert!(rice > sugarcane);
    }

    /// Unknown crops silently use the default factor.
    #[test]
    fn test_unknown_crop_defaults() {
        let unknown = estimate_soil_moisture(3, 30.0, 40.0, "quinoa");
        let corn = estimate_soil_moisture(3, 30.0, 40.0, "corn");
        assert_eq!(unknown, 67);
        assert!(corn < unknown);
    }

    /// Day counts are floored to one so a same-day estimate still shows
    /// drying.
    #[test]
    fn test_day_floor() {
        assert_eq!(
            estimate_soil_moisture(0, 30.0, 40.0, "rice"),
            estimate_soil_moisture(1, 30.0, 40.0, "rice")
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for plausible field temperatures
    fn temperature_strategy() -> impl Strategy<Value = f64> {
        -10.0..55.0f64
    }

    /// Strategy for humidity percentages
    fn humidity_strategy() -> impl Strategy<Value = f64> {
        0.0..=100.0f64
    }

    /// Strategy for crop names, listed and unlisted
    fn crop_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("rice"),
            Just("wheat"),
            Just("corn"),
            Just("sugarcane"),
            Just("okra"),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Estimates stay inside [10, 100] for any input combination.
        #[test]
        fn prop_estimate_bounds(
            days in 0u32..400,
            temp in temperature_strategy(),
            humidity in humidity_strategy(),
            crop in crop_strategy()
        ) {
            let estimate = estimate_soil_moisture(days, temp, humidity, crop);
            prop_assert!((10..=100).contains(&estimate));
        }

        /// With non-negative daily loss, waiting longer never increases the
        /// estimate.
        #[test]
        fn prop_estimate_monotone_in_days(
            days in 1u32..200,
            temp in 0.0..55.0f64,
            humidity in humidity_strategy(),
            crop in crop_strategy()
        ) {
            let sooner = estimate_soil_moisture(days, temp, humidity, crop);
            let later = estimate_soil_moisture(days + 1, temp, humidity, crop);
            prop_assert!(later <= sooner);
        }

        /// The estimator is a pure function.
        #[test]
        fn prop_estimate_deterministic(
            days in 0u32..400,
            temp in temperature_strategy(),
            humidity in humidity_strategy(),
            crop in crop_strategy()
        ) {
            let a = estimate_soil_moisture(days, temp, humidity, crop);
            let b = estimate_soil_moisture(days, temp, humidity, crop);
            prop_assert_eq!(a, b);
        }
    }
}
