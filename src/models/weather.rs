//! Weather inputs consumed by the engine

use serde::{Deserialize, Serialize};

/// A current-conditions reading supplied by the caller for one decision.
///
/// Sourced from a weather API by the calling layer; the engine never fetches
/// weather itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    /// Relative humidity, 0-100.
    pub humidity_pct: f64,
    /// Probability of rain in the forecast window, 0-100.
    pub rain_forecast_pct: f64,
    /// Free-text conditions from the forecast provider.
    pub description: String,
}

/// One synthetic day produced by the seasonal weather generator.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DailyWeather {
    pub t_max_c: f64,
    pub t_min_c: f64,
    pub rain_mm: f64,
}

impl DailyWeather {
    /// Daily mean temperature, the input to GDD accumulation.
    pub fn mean_temperature(&self) -> f64 {
        (self.t_max_c + self.t_min_c) / 2.0
    }
}
