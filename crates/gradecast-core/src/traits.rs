//! The predictor capability seam.
//!
//! Implemented by the `gradecast-model` crate; the engine only ever sees
//! this trait. Predictors are read-only after construction, so one
//! instance is safely shared across sessions without locking.

use crate::error::PredictError;
use crate::row::FeatureRow;

/// An opaque capability that scores one feature row.
pub trait Predictor: Send + Sync + std::fmt::Debug {
    /// Human-readable predictor name (e.g. "linear-pipeline").
    fn name(&self) -> &str;

    /// Score a single row, returning the raw (unrounded) predicted value.
    ///
    /// Synchronous and stateless with respect to prior calls; any internal
    /// failure surfaces as `PredictError::PredictionFailed`.
    fn predict_row(&self, row: &FeatureRow) -> Result<f64, PredictError>;
}
