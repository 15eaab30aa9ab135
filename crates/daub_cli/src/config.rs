//! Daub configuration file handling

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level Daub configuration (daub.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct DaubConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Size of the rect scenes are rendered into
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    400.0
}

fn default_height() -> f32 {
    300.0
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// How recorded commands are printed
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The command log as a JSON array
    #[default]
    Json,
    /// One command per line, indented by save depth
    Text,
}

/// Logging configuration
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl DaubConfig {
    pub const FILE_NAME: &'static str = "daub.toml";

    /// Load an explicit config file, or `./daub.toml` if present
    ///
    /// An explicit path must exist; the implicit one falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                let implicit = Path::new(Self::FILE_NAME);
                if implicit.exists() {
                    Self::load_from_file(implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("No config file found at {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
