//! Loading scene files from disk

use anyhow::{Context, Result};
use daub_core::SceneSpec;
use std::fs;
use std::path::Path;

/// On-disk scene encoding, picked from the file extension
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneFormat {
    Toml,
    Json,
}

impl SceneFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(SceneFormat::Toml),
            Some("json") => Ok(SceneFormat::Json),
            Some(other) => {
                anyhow::bail!("Unsupported scene extension `.{other}` (expected .toml or .json)")
            }
            None => anyhow::bail!("Scene file {} has no extension", path.display()),
        }
    }
}

pub fn parse_scene(content: &str, format: SceneFormat) -> Result<SceneSpec> {
    let scene = match format {
        SceneFormat::Toml => toml::from_str(content)?,
        SceneFormat::Json => serde_json::from_str(content)?,
    };
    Ok(scene)
}

pub fn load_scene(path: &Path) -> Result<SceneSpec> {
    let format = SceneFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene {}", path.display()))?;
    let scene = parse_scene(&content, format)
        .with_context(|| format!("Failed to parse scene {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        actions = scene.actions.len(),
        "loaded scene"
    );
    Ok(scene)
}
