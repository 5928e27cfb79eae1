//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use gradecast_core::fields::Field;
use gradecast_core::form::FormState;
use gradecast_model::{load_config_from, GradecastConfig};

pub mod fields;
pub mod init;
pub mod predict;
pub mod session;
pub mod validate;

/// Resolve config and the model artifact path. An explicit `--model` flag
/// wins over the config (and its `GRADECAST_MODEL` override).
pub(crate) fn resolve(
    model: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(GradecastConfig, PathBuf)> {
    let config = load_config_from(config_path.as_deref())?;
    let model_path = model.unwrap_or_else(|| config.model_path.clone());
    Ok((config, model_path))
}

/// Render the current input record, one row per field.
pub(crate) fn input_table(state: &FormState) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    for field in Field::ALL {
        table.add_row(vec![field.name().to_string(), state.value(field).to_string()]);
    }
    table
}
