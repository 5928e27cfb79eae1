//! The linear pipeline predictor.
//!
//! The artifact re-expresses a standardize-then-regress pipeline as
//! explicit parameters: per-column standardization plus a linear weight
//! for numeric columns, and a weight per encoding level for categorical
//! columns. The parameter values are owned by the external training
//! process; this crate only evaluates them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use gradecast_core::error::{ModelError, PredictError};
use gradecast_core::fields::{Field, FieldDomain};
use gradecast_core::row::FeatureRow;
use gradecast_core::traits::Predictor;

/// The artifact schema version this crate can evaluate.
pub const SCHEMA_VERSION: u32 = 1;

/// Standardization parameters and weight for one numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericFeature {
    pub column: String,
    pub mean: f64,
    pub std_dev: f64,
    pub coefficient: f64,
}

/// Weight for one categorical encoding level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryLevel {
    pub value: String,
    pub coefficient: f64,
}

/// Level weights for one categorical column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalFeature {
    pub column: String,
    pub levels: Vec<CategoryLevel>,
}

/// The serialized regression pipeline, as trained externally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub schema_version: u32,
    /// Model identifier (e.g. "exam-score-linear-v1").
    pub name: String,
    #[serde(default)]
    pub numeric: Vec<NumericFeature>,
    #[serde(default)]
    pub categorical: Vec<CategoricalFeature>,
    pub intercept: f64,
}

/// A loaded pipeline, ready to score rows.
#[derive(Debug)]
pub struct PipelineModel {
    artifact: PipelineArtifact,
}

impl PipelineModel {
    /// Wrap a parsed artifact, rejecting parameters the pipeline cannot
    /// evaluate. Anything rejected here is a load failure, not a
    /// per-prediction failure.
    pub fn new(artifact: PipelineArtifact) -> Result<Self, ModelError> {
        if artifact.schema_version != SCHEMA_VERSION {
            return Err(ModelError::LoadFailed(format!(
                "unsupported schema version {} (expected {SCHEMA_VERSION})",
                artifact.schema_version
            )));
        }
        if !artifact.intercept.is_finite() {
            return Err(ModelError::LoadFailed("intercept is not finite".into()));
        }
        for feature in &artifact.numeric {
            if !(feature.std_dev > 0.0) || !feature.std_dev.is_finite() {
                return Err(ModelError::LoadFailed(format!(
                    "std_dev for {} must be a positive number",
                    feature.column
                )));
            }
            if !feature.mean.is_finite() || !feature.coefficient.is_finite() {
                return Err(ModelError::LoadFailed(format!(
                    "parameters for {} are not finite",
                    feature.column
                )));
            }
        }
        for feature in &artifact.categorical {
            for level in &feature.levels {
                if !level.coefficient.is_finite() {
                    return Err(ModelError::LoadFailed(format!(
                        "coefficient for {}={} is not finite",
                        feature.column, level.value
                    )));
                }
            }
        }
        Ok(Self { artifact })
    }

    pub fn artifact(&self) -> &PipelineArtifact {
        &self.artifact
    }
}

impl Predictor for PipelineModel {
    fn name(&self) -> &str {
        &self.artifact.name
    }

    fn predict_row(&self, row: &FeatureRow) -> Result<f64, PredictError> {
        let mut score = self.artifact.intercept;

        for feature in &self.artifact.numeric {
            let x = row.numeric(&feature.column).ok_or_else(|| {
                PredictError::PredictionFailed(format!(
                    "row has no numeric column: {}",
                    feature.column
                ))
            })?;
            score += feature.coefficient * (x - feature.mean) / feature.std_dev;
        }

        for feature in &self.artifact.categorical {
            let value = row.categorical(&feature.column).ok_or_else(|| {
                PredictError::PredictionFailed(format!(
                    "row has no categorical column: {}",
                    feature.column
                ))
            })?;
            let level = feature
                .levels
                .iter()
                .find(|l| l.value == value)
                .ok_or_else(|| {
                    PredictError::PredictionFailed(format!(
                        "unknown level for {}: {value}",
                        feature.column
                    ))
                })?;
            score += level.coefficient;
        }

        if !score.is_finite() {
            return Err(PredictError::PredictionFailed(
                "predicted score is not finite".into(),
            ));
        }
        Ok(score)
    }
}

/// A non-fatal finding from artifact validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The artifact column (if applicable).
    pub column: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate an artifact against the form schema.
///
/// All findings are warnings: the artifact owns its own schema, so a
/// mismatch only means predictions may fail or ignore form fields.
pub fn validate_artifact(artifact: &PipelineArtifact) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut covered: HashSet<Field> = HashSet::new();

    for feature in &artifact.numeric {
        if !seen.insert(&feature.column) {
            warnings.push(warning(
                &feature.column,
                format!("duplicate column: {}", feature.column),
            ));
        }
        match feature.column.parse::<Field>() {
            Ok(field) => {
                covered.insert(field);
                if matches!(field.domain(), FieldDomain::OneOf(_)) {
                    warnings.push(warning(
                        &feature.column,
                        format!("categorical form field used as numeric: {}", feature.column),
                    ));
                }
            }
            Err(_) => warnings.push(warning(
                &feature.column,
                format!("not a form column: {}", feature.column),
            )),
        }
    }

    for feature in &artifact.categorical {
        if !seen.insert(&feature.column) {
            warnings.push(warning(
                &feature.column,
                format!("duplicate column: {}", feature.column),
            ));
        }
        if feature.levels.is_empty() {
            warnings.push(warning(
                &feature.column,
                format!("no levels defined for {}", feature.column),
            ));
        }
        match feature.column.parse::<Field>() {
            Ok(field) => match field.domain() {
                FieldDomain::OneOf(options) => {
                    covered.insert(field);
                    for level in &feature.levels {
                        if !options.contains(&level.value.as_str()) {
                            warnings.push(warning(
                                &feature.column,
                                format!(
                                    "level outside the form domain: {}={}",
                                    feature.column, level.value
                                ),
                            ));
                        }
                    }
                }
                _ => {
                    covered.insert(field);
                    warnings.push(warning(
                        &feature.column,
                        format!("numeric form field used as categorical: {}", feature.column),
                    ));
                }
            },
            Err(_) => warnings.push(warning(
                &feature.column,
                format!("not a form column: {}", feature.column),
            )),
        }
    }

    for field in Field::ALL {
        if !covered.contains(&field) {
            warnings.push(ValidationWarning {
                column: None,
                message: format!("form field not consumed by the model: {field}"),
            });
        }
    }

    warnings
}

fn warning(column: &str, message: String) -> ValidationWarning {
    ValidationWarning {
        column: Some(column.to_string()),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradecast_core::form::FormState;

    /// A minimal artifact consuming two numeric and one categorical column.
    fn small_artifact() -> PipelineArtifact {
        PipelineArtifact {
            schema_version: SCHEMA_VERSION,
            name: "test-pipeline".into(),
            numeric: vec![
                NumericFeature {
                    column: "study_hours_per_day".into(),
                    mean: 3.0,
                    std_dev: 1.5,
                    coefficient: 6.0,
                },
                NumericFeature {
                    column: "sleep_hours".into(),
                    mean: 7.0,
                    std_dev: 1.0,
                    coefficient: 2.0,
                },
            ],
            categorical: vec![CategoricalFeature {
                column: "part_time_job".into(),
                levels: vec![
                    CategoryLevel {
                        value: "Yes".into(),
                        coefficient: -1.5,
                    },
                    CategoryLevel {
                        value: "No".into(),
                        coefficient: 0.5,
                    },
                ],
            }],
            intercept: 60.0,
        }
    }

    #[test]
    fn predicts_the_hand_computed_score() {
        let model = PipelineModel::new(small_artifact()).unwrap();
        let row = FeatureRow::from(&FormState::default());

        // defaults: study 3.0 (z=0), sleep 7.0 (z=0), part_time_job No
        let score = model.predict_row(&row).unwrap();
        assert!((score - 60.5).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn prediction_is_deterministic() {
        let model = PipelineModel::new(small_artifact()).unwrap();
        let row = FeatureRow::from(&FormState::default());

        let first = model.predict_row(&row).unwrap();
        for _ in 0..5 {
            assert_eq!(model.predict_row(&row).unwrap(), first);
        }
    }

    #[test]
    fn standardization_is_applied() {
        let model = PipelineModel::new(small_artifact()).unwrap();
        let mut row = FeatureRow::from(&FormState::default());
        row.study_hours_per_day = 6.0; // z = (6 - 3) / 1.5 = 2

        let score = model.predict_row(&row).unwrap();
        assert!((score - 72.5).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn unknown_level_fails_prediction() {
        let model = PipelineModel::new(small_artifact()).unwrap();
        let mut row = FeatureRow::from(&FormState::default());
        row.part_time_job = "Maybe".into();

        let err = model.predict_row(&row).unwrap_err();
        assert!(err.to_string().contains("unknown level for part_time_job"));
    }

    #[test]
    fn missing_column_fails_prediction() {
        let mut artifact = small_artifact();
        artifact.numeric[0].column = "grade".into();
        let model = PipelineModel::new(artifact).unwrap();

        let err = model.predict_row(&FeatureRow::from(&FormState::default())).unwrap_err();
        assert!(err.to_string().contains("no numeric column: grade"));
    }

    #[test]
    fn zero_std_dev_is_a_load_failure() {
        let mut artifact = small_artifact();
        artifact.numeric[0].std_dev = 0.0;

        let err = PipelineModel::new(artifact).unwrap_err();
        assert!(err.to_string().contains("std_dev"));
    }

    #[test]
    fn unsupported_schema_version_is_a_load_failure() {
        let mut artifact = small_artifact();
        artifact.schema_version = 2;

        let err = PipelineModel::new(artifact).unwrap_err();
        assert!(err.to_string().contains("unsupported schema version 2"));
    }

    #[test]
    fn non_finite_intercept_is_a_load_failure() {
        let mut artifact = small_artifact();
        artifact.intercept = f64::NAN;
        assert!(PipelineModel::new(artifact).is_err());
    }

    #[test]
    fn validate_reports_uncovered_fields() {
        let warnings = validate_artifact(&small_artifact());
        // 14 form fields, 3 consumed
        assert_eq!(warnings.len(), 11);
        assert!(warnings
            .iter()
            .all(|w| w.message.contains("not consumed by the model")));
    }

    #[test]
    fn validate_flags_schema_mismatches() {
        let mut artifact = small_artifact();
        artifact.numeric.push(NumericFeature {
            column: "grade".into(),
            mean: 0.0,
            std_dev: 1.0,
            coefficient: 1.0,
        });
        artifact.numeric.push(NumericFeature {
            column: "sleep_hours".into(),
            mean: 7.0,
            std_dev: 1.0,
            coefficient: 1.0,
        });
        artifact.categorical[0]
            .levels
            .push(CategoryLevel {
                value: "Sometimes".into(),
                coefficient: 0.0,
            });

        let warnings = validate_artifact(&artifact);
        let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("not a form column: grade")));
        assert!(messages
            .iter()
            .any(|m| m.contains("duplicate column: sleep_hours")));
        assert!(messages
            .iter()
            .any(|m| m.contains("level outside the form domain: part_time_job=Sometimes")));
    }
}
