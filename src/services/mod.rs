//! Computational components of the irrigation engine

pub mod decision;
pub mod growth_stage;
pub mod simulator;
pub mod soil_moisture;
pub mod synthetic_weather;
pub mod water_requirement;

pub use decision::determine_irrigation_action;
pub use growth_stage::{resolve_growth_stage, GENERIC_STAGE_NAME};
pub use simulator::GrowthWaterSimulator;
pub use soil_moisture::estimate_soil_moisture;
pub use synthetic_weather::SyntheticWeather;
pub use water_requirement::{calculate_water_requirement, FLOW_RATE_LPM};
