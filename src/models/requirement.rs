//! Water requirement sizing models

use rust_decimal::Decimal;
use serde::Serialize;

/// Sizing result for a planting: daily volume per plant, total volume, and
/// the equivalent run time at the manual-controller flow rate.
#[derive(Debug, Clone, Serialize)]
pub struct WaterRequirement {
    pub per_plant_liters: Decimal,
    pub total_liters: Decimal,
    pub duration_minutes: u32,
}
