//! Gradebook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::codec::Format;

/// Environment variable that overrides the configured data file.
pub const DATA_FILE_ENV: &str = "GRADEBOOK_DATA_FILE";

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Roster file loaded at start and saved after every change.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Format of the data file. Derived from its extension when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    /// Directory progress reports are exported into.
    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,
    /// How many students `top` lists by default.
    #[serde(default = "default_top_count")]
    pub top_count: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("student_data.json")
}
fn default_reports_dir() -> PathBuf {
    PathBuf::from("reports")
}
fn default_top_count() -> usize {
    10
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            format: None,
            reports_dir: default_reports_dir(),
            top_count: default_top_count(),
        }
    }
}

impl GradebookConfig {
    /// Format of the data file, explicit or guessed from its extension.
    pub fn data_format(&self) -> Format {
        self.format
            .unwrap_or_else(|| Format::from_path(&self.data_file))
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// `GRADEBOOK_DATA_FILE` overrides `data_file`.
pub fn load_config() -> Result<GradebookConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<GradebookConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => GradebookConfig::default(),
    };

    if let Ok(data_file) = std::env::var(DATA_FILE_ENV) {
        if !data_file.trim().is_empty() {
            config.data_file = PathBuf::from(data_file);
        }
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
