//! Mock predictor for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use gradecast_core::error::PredictError;
use gradecast_core::row::FeatureRow;
use gradecast_core::traits::Predictor;

/// A mock predictor for exercising the session without a real artifact.
///
/// Returns a fixed score (or a scripted failure) and records what it was
/// asked to score.
#[derive(Debug)]
pub struct MockPredictor {
    score: f64,
    failure: Option<String>,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Last row received.
    last_row: Mutex<Option<FeatureRow>>,
}

impl MockPredictor {
    /// Create a mock that always returns the same score.
    pub fn with_fixed_score(score: f64) -> Self {
        Self {
            score,
            failure: None,
            call_count: AtomicU32::new(0),
            last_row: Mutex::new(None),
        }
    }

    /// Create a mock that fails every invocation with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            score: 0.0,
            failure: Some(message.to_string()),
            call_count: AtomicU32::new(0),
            last_row: Mutex::new(None),
        }
    }

    /// Get the number of calls made to this predictor.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last row submitted to this predictor.
    pub fn last_row(&self) -> Option<FeatureRow> {
        self.last_row.lock().unwrap().clone()
    }
}

impl Predictor for MockPredictor {
    fn name(&self) -> &str {
        "mock"
    }

    fn predict_row(&self, row: &FeatureRow) -> Result<f64, PredictError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_row.lock().unwrap() = Some(row.clone());

        match &self.failure {
            Some(message) => Err(PredictError::PredictionFailed(message.clone())),
            None => Ok(self.score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use gradecast_core::engine::PredictEngine;
    use gradecast_core::fields::{Field, FieldValue};
    use gradecast_core::form::{FormManager, FormState};

    #[test]
    fn fixed_score() {
        let predictor = MockPredictor::with_fixed_score(64.25);
        let row = FeatureRow::from(&FormState::default());

        assert_eq!(predictor.predict_row(&row).unwrap(), 64.25);
        assert_eq!(predictor.call_count(), 1);
        assert_eq!(predictor.last_row().unwrap(), row);
    }

    #[test]
    fn scripted_failure() {
        let predictor = MockPredictor::failing("model exploded");
        let row = FeatureRow::from(&FormState::default());

        let err = predictor.predict_row(&row).unwrap_err();
        assert_eq!(
            err,
            PredictError::PredictionFailed("model exploded".into())
        );
        assert_eq!(predictor.call_count(), 1);
    }

    #[test]
    fn engine_submits_the_current_snapshot() {
        let predictor = Arc::new(MockPredictor::with_fixed_score(70.0));
        let engine = PredictEngine::new(predictor.clone());

        let mut manager = FormManager::new();
        manager.set(Field::Age, FieldValue::Int(18)).unwrap();
        manager
            .set(Field::Gender, FieldValue::Choice("Male".into()))
            .unwrap();
        manager
            .set(Field::StudyHoursPerDay, FieldValue::Float(5.0))
            .unwrap();

        let score = engine.predict(manager.state()).unwrap();
        assert_eq!(score, 70.0);

        let row = predictor.last_row().unwrap();
        assert_eq!(row.age, 18);
        assert_eq!(row.gender, "Male");
        assert_eq!(row.study_hours_per_day, 5.0);
        // untouched fields arrive with their default encodings
        assert_eq!(row.parental_education_level, "High School");
        assert_eq!(row.extracurricular_participation, "Yes");
    }

    #[test]
    fn failed_prediction_leaves_state_unchanged() {
        let engine = PredictEngine::new(Arc::new(MockPredictor::failing("down")));

        let mut manager = FormManager::new();
        manager.set(Field::SleepHours, FieldValue::Float(6.0)).unwrap();
        let before = manager.state().clone();

        assert!(engine.predict(manager.state()).is_err());
        assert_eq!(*manager.state(), before);
    }
}
