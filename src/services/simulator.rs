//! Day-by-day growth and water usage simulation
//!
//! Walks planting date to today, accumulating growing degree days and
//! running two irrigation strategies side by side: a fixed five-day flood
//! schedule and a moisture-threshold-driven adaptive one. Day order is a
//! correctness invariant: each day's smart-moisture balance, last-flood
//! marker, and GDD total feed the next day.

use chrono::NaiveDate;
use tracing::info;

use crate::models::{DailyGrowthRecord, GrowthPhase, GrowthSimulation, WaterUsageSummary};
use crate::services::synthetic_weather::SyntheticWeather;

/// Days between traditional flood irrigations.
const TRADITIONAL_CYCLE_DAYS: i64 = 5;
/// Water applied per traditional flood, in mm.
const TRADITIONAL_APPLICATION_MM: f64 = 50.0;
/// Same-day rainfall at or above this cancels a scheduled flood.
const RAIN_SKIP_MM: f64 = 10.0;
/// Smart strategy's starting soil moisture percentage.
const SMART_INITIAL_MOISTURE: f64 = 50.0;
/// Smart strategy irrigates when moisture falls below this.
const SMART_REFILL_TRIGGER: f64 = 40.0;
/// Smart strategy refills to this level.
const SMART_REFILL_TARGET: f64 = 80.0;
/// Conversion from saved depth in mm to gallons.
const GALLONS_PER_MM: f64 = 264.0;

/// Growth and comparative water usage simulator over a synthetic weather
/// source.
pub struct GrowthWaterSimulator {
    weather: SyntheticWeather,
}

impl GrowthWaterSimulator {
    /// Simulator over the given weather source. Pass a seeded source for
    /// reproducible output.
    pub fn new(weather: SyntheticWeather) -> Self {
        Self { weather }
    }

    /// Simulate from `planting` through `today` inclusive.
    ///
    /// A planting date in the future yields an empty simulation with zero
    /// usage, not an error.
    pub fn run(
        &mut self,
        base_temperature_c: f64,
        total_required_gdd: f64,
        planting: NaiveDate,
        today: NaiveDate,
    ) -> GrowthSimulation {
        let mut records = Vec::new();
        let mut accumulated_gdd = 0.0;
        let mut current_growth_pct = 0.0;

        let mut total_traditional_mm = 0.0;
        let mut total_smart_mm = 0.0;
        // Far in the past so the schedule fires on day 0.
        let mut last_traditional_day: i64 = -999;
        let mut smart_moisture = SMART_INITIAL_MOISTURE;

        for (day_index, date) in planting
            .iter_days()
            .take_while(|d| *d <= today)
            .enumerate()
        {
            let day_index = day_index as i64;
            let day = self.weather.sample_day(date);
            let avg_temp = day.mean_temperature();

            // GDD never goes negative on cold days
            let daily_gdd = (avg_temp - base_temperature_c).max(0.0);
            accumulated_gdd += daily_gdd;

            let pct = (accumulated_gdd / total_required_gdd * 100.0).min(100.0);
            let phase = GrowthPhase::from_percentage(pct);

            // Traditional: flood every five days unless the day is already wet
            if day_index - last_traditional_day >= TRADITIONAL_CYCLE_DAYS
                && day.rain_mm < RAIN_SKIP_MM
            {
                total_traditional_mm += TRADITIONAL_APPLICATION_MM;
                last_traditional_day = day_index;
            }

            // Smart: coarse moisture balance, refill on demand
            let et = avg_temp / 5.0;
            smart_moisture -= et * 2.0;
            smart_moisture += day.rain_mm * 2.0;
            if smart_moisture < SMART_REFILL_TRIGGER {
                total_smart_mm += (SMART_REFILL_TARGET - smart_moisture) / 2.0;
                smart_moisture = SMART_REFILL_TARGET;
            }
            if smart_moisture > 100.0 {
                smart_moisture = 100.0;
            }

            records.push(DailyGrowthRecord {
                day: day_index as u32 + 1,
                date,
                growth_percentage: round2(pct),
                growth_stage: phase,
            });

            current_growth_pct = pct;
        }

        let water = summarize_usage(total_traditional_mm, total_smart_mm);

        info!(
            days = records.len(),
            growth_pct = current_growth_pct,
            traditional_mm = water.traditional_usage_mm,
            smart_mm = water.smart_usage_mm,
            "growth simulation complete"
        );

        GrowthSimulation {
            records,
            water,
            current_growth_pct: round2(current_growth_pct),
        }
    }
}

/// Compare the two strategies' totals. Savings never report negative even
/// when the adaptive strategy happened to use more water.
fn summarize_usage(traditional_mm: f64, smart_mm: f64) -> WaterUsageSummary {
    let saved_mm = (traditional_mm - smart_mm).max(0.0);
    let saved_percentage = if traditional_mm > 0.0 {
        saved_mm / traditional_mm * 100.0
    } else {
        0.0
    };

    WaterUsageSummary {
        traditional_usage_mm: traditional_mm,
        smart_usage_mm: smart_mm,
        saved_gallons: (saved_mm * GALLONS_PER_MM).round(),
        saved_percentage,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
