//! Error taxonomy for the form/predict session.
//!
//! Defined here so every layer classifies failures the same way: the two
//! model-load errors are fatal for the session, the two interaction
//! errors are recoverable and leave the form state untouched.

use std::path::PathBuf;

use thiserror::Error;

use crate::fields::{Field, FieldDomain, FieldValue};

/// A rejected form mutation. Recoverable; the state is unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// The supplied value lies outside the field's declared domain.
    #[error("invalid value for {field}: {value} (expected {domain})")]
    InvalidFieldValue {
        field: Field,
        value: FieldValue,
        domain: FieldDomain,
    },
}

impl FormError {
    /// The field whose mutation was rejected.
    pub fn field(&self) -> Field {
        match self {
            FormError::InvalidFieldValue { field, .. } => *field,
        }
    }
}

/// A failure acquiring the predictor capability at startup.
///
/// Both variants are fatal: the session must stop rather than serve
/// predictions against no model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The artifact file does not exist at the expected path.
    #[error("model artifact not found: {}", .0.display())]
    ArtifactMissing(PathBuf),

    /// The artifact exists but could not be loaded (unreadable,
    /// unparseable, unsupported version, or invalid parameters).
    #[error("failed to load model artifact: {0}")]
    LoadFailed(String),
}

/// A failure raised by the predictor capability during one invocation.
///
/// Recoverable at the interaction level; the form state is unchanged and
/// the user may retry immediately. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("prediction failed: {0}")]
    PredictionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_value_message() {
        let err = FormError::InvalidFieldValue {
            field: Field::Age,
            value: FieldValue::Int(30),
            domain: Field::Age.domain(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for age: 30 (expected integer in [18, 25])"
        );
        assert_eq!(err.field(), Field::Age);
    }

    #[test]
    fn model_error_messages() {
        let missing = ModelError::ArtifactMissing(PathBuf::from("model.json"));
        assert_eq!(missing.to_string(), "model artifact not found: model.json");

        let load = ModelError::LoadFailed("bad schema".into());
        assert_eq!(load.to_string(), "failed to load model artifact: bad schema");
    }
}
