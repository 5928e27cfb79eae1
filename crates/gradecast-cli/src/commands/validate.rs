//! The `gradecast validate` command.

use std::path::PathBuf;

use anyhow::Result;

use gradecast_model::{load_model, validate_artifact};

pub fn execute(model: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (_config, model_path) = super::resolve(model, config_path)?;

    let pipeline = load_model(&model_path)?;
    let artifact = pipeline.artifact();
    println!(
        "Model artifact: {} ({} numeric, {} categorical columns)",
        artifact.name,
        artifact.numeric.len(),
        artifact.categorical.len()
    );

    let warnings = validate_artifact(artifact);
    for w in &warnings {
        let prefix = w
            .column
            .as_ref()
            .map(|c| format!("  [{c}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Artifact OK.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
