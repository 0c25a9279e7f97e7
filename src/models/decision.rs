//! Irrigation decision output models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommended action for the day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IrrigationAction {
    Irrigate,
    Skip,
}

impl fmt::Display for IrrigationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrrigationAction::Irrigate => write!(f, "Irrigate"),
            IrrigationAction::Skip => write!(f, "Skip"),
        }
    }
}

/// Coarse moisture classification reported alongside a decision. Derived
/// from the comparison against the dynamic threshold, not the raw reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SoilMoistureLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for SoilMoistureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoilMoistureLevel::Low => write!(f, "Low"),
            SoilMoistureLevel::Medium => write!(f, "Medium"),
            SoilMoistureLevel::High => write!(f, "High"),
        }
    }
}

/// The engine's daily recommendation.
///
/// Opaque to the engine after construction; the calling layer persists it as
/// an irrigation log row and renders it to the farmer.
#[derive(Debug, Clone, Serialize)]
pub struct IrrigationDecision {
    pub action: IrrigationAction,
    pub duration_minutes: u32,
    /// Human-readable explanation citing the numeric moisture and threshold.
    pub reason: String,
    pub soil_moisture_level: SoilMoistureLevel,
    pub water_saved_gallons: f64,
    /// Base threshold adjusted by the active growth stage's factor.
    pub dynamic_threshold: i32,
    /// Name of the resolved growth stage, or the generic fallback label.
    pub growth_stage: String,
}
