//! Irrigation decision and crop-growth simulation engine for small farms
//!
//! The pure computational core behind a farm irrigation advisor: sensorless
//! soil moisture estimation, growth-stage-aware irrigation decisions,
//! day-by-day GDD growth simulation with a traditional-vs-smart water usage
//! comparison, and per-planting water requirement sizing.
//!
//! Every component is a pure, synchronous function over its inputs; results
//! are serializable values. Persistence, HTTP handling, authentication, and
//! live weather retrieval belong to the calling application.

pub mod catalog;
pub mod error;
pub mod models;
pub mod services;
pub mod validation;

pub use catalog::CropCatalog;
pub use error::{EngineError, EngineResult};
pub use models::*;
pub use services::*;
