//! Boundary validation helpers
//!
//! The engine assumes pre-validated inputs; these give the calling layer one
//! canonical set of checks to run before invoking it. The engine functions
//! do not call them internally.

use crate::error::{EngineError, EngineResult};
use crate::models::{GrowthStage, WeatherReading};

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::Validation {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate a weather reading's percentage fields.
pub fn validate_weather_reading(reading: &WeatherReading) -> EngineResult<()> {
    if !(0.0..=100.0).contains(&reading.humidity_pct) {
        return Err(invalid(
            "humidity_pct",
            "Humidity must be between 0 and 100%",
        ));
    }
    if !(0.0..=100.0).contains(&reading.rain_forecast_pct) {
        return Err(invalid(
            "rain_forecast_pct",
            "Rain forecast must be between 0 and 100%",
        ));
    }
    Ok(())
}

/// Validate a soil moisture percentage.
pub fn validate_moisture_percent(moisture: i32) -> EngineResult<()> {
    if !(0..=100).contains(&moisture) {
        return Err(invalid(
            "soil_moisture",
            "Soil moisture must be between 0 and 100%",
        ));
    }
    Ok(())
}

/// Validate that every stage window is well-formed. Overlap between stages
/// is tolerated (resolution is first-match-wins), but a window that ends
/// before it starts is upstream data corruption.
pub fn validate_stage_table(stages: &[GrowthStage]) -> EngineResult<()> {
    for stage in stages {
        if stage.start_day > stage.end_day {
            return Err(invalid(
                "stages",
                format!("Stage '{}' starts after it ends", stage.name),
            ));
        }
    }
    Ok(())
}

/// Validate a plant count for water requirement sizing.
pub fn validate_plant_count(count: u32) -> EngineResult<()> {
    if count == 0 {
        return Err(invalid("plant_count", "Plant count must be positive"));
    }
    Ok(())
}
