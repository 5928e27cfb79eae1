//! gradecast-model — Predictor implementations for gradecast.
//!
//! Loads the serialized regression pipeline artifact from disk and
//! exposes it behind the `Predictor` trait, alongside a mock predictor
//! for tests and the binary's configuration layer.

pub mod artifact;
pub mod config;
pub mod mock;
pub mod pipeline;

pub use artifact::{load_model, load_predictor, DEFAULT_ARTIFACT_FILE};
pub use config::{load_config, load_config_from, GradecastConfig};
pub use mock::MockPredictor;
pub use pipeline::{validate_artifact, PipelineArtifact, PipelineModel};
