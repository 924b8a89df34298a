use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::session::DEFAULT_INITIAL_URL;

/// How the CLI renders comparison rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Global configuration loaded from `~/.config/urldiff/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlDiffConfig {
    /// URL an interactive session starts from.
    #[serde(default = "default_initial_url")]
    pub initial_url: String,
    /// Default output format for `urldiff compare`.
    #[serde(default)]
    pub output: OutputFormat,
    /// Text shown in table cells whose value is empty.
    #[serde(default = "default_empty_placeholder")]
    pub empty_placeholder: String,
}

fn default_initial_url() -> String {
    DEFAULT_INITIAL_URL.to_string()
}

fn default_empty_placeholder() -> String {
    "—".to_string()
}

impl Default for UrlDiffConfig {
    fn default() -> Self {
        Self {
            initial_url: default_initial_url(),
            output: OutputFormat::Table,
            empty_placeholder: default_empty_placeholder(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urldiff")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlDiffConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`], for an explicit config file location.
pub fn load_or_init_at(path: &Path) -> Result<UrlDiffConfig> {
    if !path.exists() {
        let default_cfg = UrlDiffConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<UrlDiffConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: UrlDiffConfig = toml::from_str(&data)?;
    Ok(cfg)
}
