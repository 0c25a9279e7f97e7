//! Growth-stage-based dynamic irrigation decisions
//!
//! The day's recommendation comes from three rules applied in priority
//! order: a heavy-rain forecast always wins, then a moisture deficit against
//! the stage-adjusted threshold, then sufficiency.

use tracing::debug;

use crate::models::{
    GrowthStage, IrrigationAction, IrrigationDecision, SoilMoistureLevel, WeatherReading,
};
use crate::services::growth_stage::{resolve_growth_stage, GENERIC_STAGE_NAME};

/// Standard irrigation cycle length in minutes.
pub const BASE_DURATION_MINUTES: u32 = 45;
/// Gallons credited per minute of a skipped cycle.
const GALLONS_SAVED_PER_MINUTE: f64 = 10.0;
/// Extra minutes per percentage point of moisture deficit.
const MINUTES_PER_DEFICIT_POINT: f64 = 1.5;
/// Rain probability above which irrigation is skipped outright.
const HEAVY_RAIN_CUTOFF_PCT: f64 = 70.0;

/// Decide whether to irrigate today and for how long.
///
/// Inputs are assumed pre-validated (see [`crate::validation`]); the stage
/// table may be empty, in which case the base threshold applies unadjusted
/// under the generic stage label.
pub fn determine_irrigation_action(
    current_soil_moisture: i32,
    weather: &WeatherReading,
    base_threshold: i32,
    days_after_planting: u32,
    stages: &[GrowthStage],
) -> IrrigationDecision {
    let current_stage = resolve_growth_stage(days_after_planting, stages);
    let stage_factor = current_stage.map(|s| s.stage_factor).unwrap_or(0);
    let stage_name = current_stage
        .map(|s| s.name.clone())
        .unwrap_or_else(|| GENERIC_STAGE_NAME.to_string());

    let dynamic_threshold = base_threshold + stage_factor;

    debug!(
        moisture = current_soil_moisture,
        threshold = dynamic_threshold,
        stage = %stage_name,
        rain_forecast = weather.rain_forecast_pct,
        "evaluating irrigation decision"
    );

    let heavy_rain = weather.description.to_lowercase().contains("heavy rain")
        || weather.rain_forecast_pct > HEAVY_RAIN_CUTOFF_PCT;

    if heavy_rain {
        return IrrigationDecision {
            action: IrrigationAction::Skip,
            duration_minutes: 0,
            reason: format!(
                "Heavy rain forecast ({}%). Saving water.",
                weather.rain_forecast_pct
            ),
            soil_moisture_level: if current_soil_moisture > dynamic_threshold {
                SoilMoistureLevel::High
            } else {
                SoilMoistureLevel::Low
            },
            water_saved_gallons: BASE_DURATION_MINUTES as f64 * GALLONS_SAVED_PER_MINUTE,
            dynamic_threshold,
            growth_stage: stage_name,
        };
    }

    if current_soil_moisture < dynamic_threshold {
        let deficit = dynamic_threshold - current_soil_moisture;
        let duration = (BASE_DURATION_MINUTES as f64
            + deficit as f64 * MINUTES_PER_DEFICIT_POINT)
            .round() as u32;

        return IrrigationDecision {
            action: IrrigationAction::Irrigate,
            duration_minutes: duration,
            reason: format!(
                "Moisture ({}%) is below dynamic threshold ({}%) for {} stage.",
                current_soil_moisture, dynamic_threshold, stage_name
            ),
            soil_moisture_level: SoilMoistureLevel::Low,
            water_saved_gallons: 0.0,
            dynamic_threshold,
            growth_stage: stage_name,
        };
    }

    IrrigationDecision {
        action: IrrigationAction::Skip,
        duration_minutes: 0,
        reason: format!(
            "Moisture ({}%) is sufficient (Threshold: {}%).",
            current_soil_moisture, dynamic_threshold
        ),
        soil_moisture_level: SoilMoistureLevel::High,
        water_saved_gallons: BASE_DURATION_MINUTES as f64 * GALLONS_SAVED_PER_MINUTE,
        dynamic_threshold,
        growth_stage: stage_name,
    }
}
