use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default CORS proxy; the page URL is appended as its `url` query parameter.
const DEFAULT_PROXY_URL: &str = "https://api.allorigins.win/get";

/// Global configuration loaded from `~/.config/mediagrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediagrabConfig {
    /// Proxy endpoint used to fetch third-party pages.
    pub proxy_url: String,
    /// Connect timeout for the proxy fetch, in seconds.
    pub connect_timeout_secs: u64,
    /// Total transfer timeout for the proxy fetch, in seconds.
    pub timeout_secs: u64,
    /// Collapse duplicate results by default (`--unique` overrides per call).
    #[serde(default)]
    pub unique_results: bool,
}

impl Default for MediagrabConfig {
    fn default() -> Self {
        Self {
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
            unique_results: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mediagrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MediagrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MediagrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MediagrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
