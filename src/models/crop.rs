//! Crop reference data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog entry for a crop.
///
/// GDD parameters are optional here; [`crate::catalog::CropCatalog::resolve`]
/// substitutes defaults before the engine sees them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropProfile {
    pub name: String,
    /// Moisture percentage below which irrigation is considered, before
    /// growth-stage adjustment.
    pub base_moisture_threshold: i32,
    /// GDD base temperature in Celsius.
    pub base_temperature_c: Option<f64>,
    /// Accumulated GDD at which the crop is fully mature.
    pub total_required_gdd: Option<f64>,
    pub stages: Vec<GrowthStage>,
}

/// A growth stage window in days after planting. `end_day` is inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthStage {
    pub name: String,
    pub start_day: u32,
    pub end_day: u32,
    /// Signed adjustment added to the crop's base moisture threshold while
    /// this stage is active.
    pub stage_factor: i32,
}

/// A crop profile with the defaulting policy applied. The only form the
/// engine consumes.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedCropProfile {
    pub name: String,
    pub base_moisture_threshold: i32,
    pub base_temperature_c: f64,
    pub total_required_gdd: f64,
    pub stages: Vec<GrowthStage>,
}

/// Soil texture classes used by the water requirement calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SoilType {
    Clay,
    Loamy,
    Sandy,
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoilType::Clay => write!(f, "Clay"),
            SoilType::Loamy => write!(f, "Loamy"),
            SoilType::Sandy => write!(f, "Sandy"),
        }
    }
}
