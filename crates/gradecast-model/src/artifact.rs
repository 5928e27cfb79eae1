//! Model artifact acquisition.
//!
//! A one-time startup step: read the serialized pipeline from disk and
//! wrap it as the session's predictor capability. Both failure modes are
//! fatal; the caller must stop rather than serve predictions against no
//! model.

use std::path::Path;

use gradecast_core::error::ModelError;
use gradecast_core::traits::Predictor;

use crate::pipeline::{PipelineArtifact, PipelineModel};

/// Default artifact filename, resolved against the working directory.
pub const DEFAULT_ARTIFACT_FILE: &str = "model.json";

/// Parse an artifact from JSON text.
pub fn parse_artifact(content: &str) -> Result<PipelineArtifact, ModelError> {
    serde_json::from_str(content).map_err(|e| ModelError::LoadFailed(e.to_string()))
}

/// Load the pipeline model from the artifact at `path`.
pub fn load_model(path: &Path) -> Result<PipelineModel, ModelError> {
    if !path.exists() {
        return Err(ModelError::ArtifactMissing(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ModelError::LoadFailed(format!("{}: {e}", path.display())))?;
    let artifact = parse_artifact(&content)?;
    let model = PipelineModel::new(artifact)?;

    tracing::info!(
        model = %model.artifact().name,
        numeric = model.artifact().numeric.len(),
        categorical = model.artifact().categorical.len(),
        "model artifact loaded"
    );

    Ok(model)
}

/// Acquire the predictor capability from the artifact at `path`.
pub fn load_predictor(path: &Path) -> Result<Box<dyn Predictor>, ModelError> {
    Ok(Box::new(load_model(path)?))
}
