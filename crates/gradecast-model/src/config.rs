//! Configuration for the gradecast binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::artifact::DEFAULT_ARTIFACT_FILE;

/// Top-level gradecast configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradecastConfig {
    /// Path to the model artifact.
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    /// Decimal places when displaying a score. Display-only; the core
    /// always returns the unrounded scalar.
    #[serde(default = "default_score_decimals")]
    pub score_decimals: u8,
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_ARTIFACT_FILE)
}

fn default_score_decimals() -> u8 {
    2
}

impl Default for GradecastConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            score_decimals: default_score_decimals(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `gradecast.toml` in the current directory
/// 2. `~/.config/gradecast/config.toml`
///
/// Environment variable override: `GRADECAST_MODEL` replaces `model_path`.
pub fn load_config() -> Result<GradecastConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<GradecastConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradecast.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<GradecastConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradecastConfig::default(),
    };

    // Apply env var override
    if let Ok(model) = std::env::var("GRADECAST_MODEL") {
        if !model.is_empty() {
            config.model_path = PathBuf::from(model);
        }
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradecast"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GradecastConfig::default();
        assert_eq!(config.model_path, PathBuf::from("model.json"));
        assert_eq!(config.score_decimals, 2);
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
model_path = "models/exam.json"
score_decimals = 1
"#;
        let config: GradecastConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model_path, PathBuf::from("models/exam.json"));
        assert_eq!(config.score_decimals, 1);
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let config: GradecastConfig = toml::from_str(r#"model_path = "m.json""#).unwrap();
        assert_eq!(config.model_path, PathBuf::from("m.json"));
        assert_eq!(config.score_decimals, 2);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config_from(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradecast.toml");
        std::fs::write(&path, "score_decimals = 3\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.score_decimals, 3);
    }
}
