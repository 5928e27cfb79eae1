//! The prediction invoker.
//!
//! Snapshots the form state into the wire row and calls the predictor
//! capability exactly once per trigger. No retry, no fallback value, and
//! no state mutation on failure.

use std::sync::Arc;

use crate::error::PredictError;
use crate::form::FormState;
use crate::row::FeatureRow;
use crate::traits::Predictor;

/// Invokes the loaded predictor against form snapshots.
pub struct PredictEngine {
    predictor: Arc<dyn Predictor>,
}

impl PredictEngine {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self { predictor }
    }

    /// Name of the underlying predictor.
    pub fn predictor_name(&self) -> &str {
        self.predictor.name()
    }

    /// Score the given snapshot.
    ///
    /// Encodes the state through the total mapping and invokes the
    /// predictor once, synchronously. The returned scalar is unrounded;
    /// display formatting belongs to the presentation layer.
    pub fn predict(&self, state: &FormState) -> Result<f64, PredictError> {
        let row = FeatureRow::from(state);
        tracing::debug!(predictor = self.predictor.name(), "invoking predictor");
        let score = self.predictor.predict_row(&row)?;
        tracing::debug!(score, "prediction complete");
        Ok(score)
    }
}
