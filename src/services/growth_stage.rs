//! Growth stage resolution against a crop's stage table

use crate::models::GrowthStage;

/// Stage label reported when no table entry covers the day.
pub const GENERIC_STAGE_NAME: &str = "Generic Growth";

/// Find the stage covering `days_after_planting`.
///
/// First match wins when entries overlap (a data-quality issue upstream, not
/// handled here); `None` when the day falls outside every window, in which
/// case callers substitute a zero stage factor and [`GENERIC_STAGE_NAME`].
pub fn resolve_growth_stage(
    days_after_planting: u32,
    stages: &[GrowthStage],
) -> Option<&GrowthStage> {
    stages
        .iter()
        .find(|stage| days_after_planting >= stage.start_day && days_after_planting <= stage.end_day)
}
