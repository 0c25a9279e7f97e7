//! Growth simulation output models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-threshold growth phase labels used by the simulator.
///
/// Deliberately independent of the per-crop [`crate::models::GrowthStage`]
/// table the decision engine consults; the two classifications ship side by
/// side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GrowthPhase {
    Germination,
    Vegetative,
    Flowering,
    Maturity,
}

impl GrowthPhase {
    /// Classify a growth percentage. Cutoffs are strict: a crop at exactly
    /// 20/50/75 percent stays in the lower phase.
    pub fn from_percentage(pct: f64) -> Self {
        if pct > 75.0 {
            GrowthPhase::Maturity
        } else if pct > 50.0 {
            GrowthPhase::Flowering
        } else if pct > 20.0 {
            GrowthPhase::Vegetative
        } else {
            GrowthPhase::Germination
        }
    }
}

impl fmt::Display for GrowthPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthPhase::Germination => write!(f, "Germination"),
            GrowthPhase::Vegetative => write!(f, "Vegetative"),
            GrowthPhase::Flowering => write!(f, "Flowering"),
            GrowthPhase::Maturity => write!(f, "Maturity"),
        }
    }
}

/// One simulated day from planting to today.
#[derive(Debug, Clone, Serialize)]
pub struct DailyGrowthRecord {
    /// 1-based day number from planting.
    pub day: u32,
    pub date: NaiveDate,
    /// Accumulated growth, clamped to [0, 100], rounded to 2 decimals.
    pub growth_percentage: f64,
    pub growth_stage: GrowthPhase,
}

/// Cumulative water usage of the two simulated strategies. Depths are mm
/// over the season; the gallon figure uses the product's fixed mm-to-gallon
/// scale.
#[derive(Debug, Clone, Serialize)]
pub struct WaterUsageSummary {
    pub traditional_usage_mm: f64,
    pub smart_usage_mm: f64,
    /// Never negative, even when the smart strategy used more water.
    pub saved_gallons: f64,
    pub saved_percentage: f64,
}

/// Full simulator output for one planting-to-today walk.
///
/// Records are ordered by day; re-running the same range produces a fresh
/// sequence, so persistence collaborators should upsert by (crop, date).
#[derive(Debug, Clone, Serialize)]
pub struct GrowthSimulation {
    pub records: Vec<DailyGrowthRecord>,
    pub water: WaterUsageSummary,
    /// The last record's growth percentage, 0 when the range is empty.
    pub current_growth_pct: f64,
}
