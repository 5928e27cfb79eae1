//! The `gradecast predict` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use gradecast_core::engine::PredictEngine;
use gradecast_core::fields::{Field, FieldValue};
use gradecast_core::form::FormManager;
use gradecast_model::load_predictor;

pub fn execute(
    sets: Vec<String>,
    model: Option<PathBuf>,
    config_path: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let (config, model_path) = super::resolve(model, config_path)?;
    let predictor = load_predictor(&model_path)?;
    let engine = PredictEngine::new(Arc::from(predictor));

    let mut manager = FormManager::new();
    for assignment in &sets {
        apply_assignment(&mut manager, assignment)?;
    }

    if !quiet {
        println!("{}", super::input_table(manager.state()));
    }

    let score = engine.predict(manager.state())?;
    let decimals = config.score_decimals as usize;
    println!("Predicted exam score: {score:.decimals$}");

    Ok(())
}

/// Parse and apply one `field=value` assignment.
fn apply_assignment(manager: &mut FormManager, assignment: &str) -> Result<()> {
    let (name, raw) = assignment
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected FIELD=VALUE, got: {assignment}"))?;
    let field: Field = name
        .trim()
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{e}"))?;
    let value = FieldValue::parse_for(field, raw);
    manager.set(field, value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradecast_core::fields::Gender;

    #[test]
    fn assignments_apply_in_order() {
        let mut manager = FormManager::new();
        apply_assignment(&mut manager, "age=18").unwrap();
        apply_assignment(&mut manager, "gender=Male").unwrap();
        apply_assignment(&mut manager, "study_hours_per_day=5.0").unwrap();

        assert_eq!(manager.state().age(), 18);
        assert_eq!(manager.state().gender(), Gender::Male);
        assert_eq!(manager.state().study_hours_per_day(), 5.0);
    }

    #[test]
    fn malformed_assignment_is_rejected() {
        let mut manager = FormManager::new();
        assert!(apply_assignment(&mut manager, "age").is_err());
        assert!(apply_assignment(&mut manager, "grade=1").is_err());
        assert!(apply_assignment(&mut manager, "age=30").is_err());
    }
}
