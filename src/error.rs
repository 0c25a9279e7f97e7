//! Error handling for the irrigation engine
//!
//! The computational core never fails: degenerate date ranges produce empty
//! results, unknown crops fall back to defaults, and unresolved growth
//! stages degrade to a generic zero-factor stage. Errors exist only at the
//! catalog/validation boundary the calling layer runs before invoking the
//! engine.

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Crop not found: {0}")]
    CropNotFound(String),
}

/// Result type alias for the engine boundary
pub type EngineResult<T> = Result<T, EngineError>;
