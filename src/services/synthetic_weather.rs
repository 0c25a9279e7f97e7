//! Seasonal synthetic weather generation
//!
//! Supplies daily temperature and rainfall for historical simulation when no
//! observed record exists. A latitude-driven sinusoid sets the seasonal
//! baseline; uniform jitter and an 80/20 dry/wet split supply day-to-day
//! variation. The generator owns its RNG so production callers get fresh
//! entropy while tests pin a seed.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::DailyWeather;

/// Spread of the daily maximum/minimum around the seasonal mean, in Celsius.
const DIURNAL_SPREAD_C: f64 = 5.0;
/// Probability that a simulated day stays dry.
const DRY_DAY_PROBABILITY: f64 = 0.8;
/// Upper bound for rainfall on a wet day, in mm.
const MAX_DAILY_RAIN_MM: f64 = 20.0;

/// Latitude-seasonal stochastic weather source.
pub struct SyntheticWeather {
    latitude: f64,
    rng: StdRng,
}

impl SyntheticWeather {
    /// Generator with an entropy-seeded RNG.
    pub fn new(latitude: f64) -> Self {
        Self {
            latitude,
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed, for reproducible runs.
    pub fn seeded(latitude: f64, seed: u64) -> Self {
        Self {
            latitude,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Sample one day's weather. Advances the internal RNG.
    pub fn sample_day(&mut self, date: NaiveDate) -> DailyWeather {
        let day_temp = self.seasonal_mean(date);

        let t_max_c = day_temp + DIURNAL_SPREAD_C + self.jitter();
        let t_min_c = day_temp - DIURNAL_SPREAD_C + self.jitter();

        let rain_mm = if self.rng.gen::<f64>() > DRY_DAY_PROBABILITY {
            self.rng.gen_range(0.0..MAX_DAILY_RAIN_MM)
        } else {
            0.0
        };

        DailyWeather {
            t_max_c,
            t_min_c,
            rain_mm,
        }
    }

    /// Deterministic seasonal baseline for a date: roughly 28 C at the
    /// equator falling off with latitude, a yearly cosine elsewhere, with
    /// the phase flipped for the southern hemisphere.
    fn seasonal_mean(&self, date: NaiveDate) -> f64 {
        let day_of_year = date.ordinal0() as f64;
        let avg_yearly = 28.0 - self.latitude.abs() * 0.4;
        let season_offset = if self.latitude >= 0.0 { 0.0 } else { 180.0 };
        let amplitude = 10.0 + self.latitude.abs() * 0.1;

        let phase = 2.0 * std::f64::consts::PI * (day_of_year + season_offset) / 365.0;
        avg_yearly + amplitude * -phase.cos()
    }

    /// Uniform jitter in [-2, 2).
    fn jitter(&mut self) -> f64 {
        self.rng.gen_range(0.0..4.0) - 2.0
    }
}
