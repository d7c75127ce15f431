use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::session::DEFAULT_PROMPT;

/// Optional settings loaded from `~/.config/sitegrab/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SitegrabConfig {
    /// Directory under which per-host folders are created (None = current directory).
    pub output_dir: Option<PathBuf>,
    /// Text shown before each target is read.
    pub prompt: String,
}

impl Default for SitegrabConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Location of the config file in the XDG config home. The file may not exist.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitegrab")?;
    Ok(xdg_dirs.get_config_home().join("sitegrab").join("config.toml"))
}

/// Load configuration from the XDG location; defaults when the file is absent.
///
/// Unlike the state directory, nothing is created here: running without a
/// config file is the normal case.
pub fn load() -> Result<SitegrabConfig> {
    load_from(&config_path()?)
}

/// Load configuration from `path`; defaults when the file is absent.
pub fn load_from(path: &Path) -> Result<SitegrabConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(SitegrabConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: SitegrabConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
