use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::validate::ValidationMode;

/// Public weserv endpoint, used when no config overrides it.
pub const DEFAULT_API_URL: &str = "https://images.weserv.nl";

/// Global configuration loaded from `~/.config/weserv/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeservConfig {
    /// Base of the image API; the query string is appended after `?`.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// "silent" (default) drops out-of-range values; "strict" also reports them.
    #[serde(default)]
    pub validation: ValidationMode,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for WeservConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            validation: ValidationMode::default(),
        }
    }
}

impl WeservConfig {
    /// Checks that `api_url` is an absolute http(s) URL without its own query.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api_url)
            .with_context(|| format!("api_url is not a valid URL: {}", self.api_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("api_url must use http or https: {}", self.api_url);
        }
        if self.api_url.contains('?') || self.api_url.contains('#') {
            bail!("api_url must not carry a query or fragment: {}", self.api_url);
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("weserv")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<WeservConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: WeservConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WeservConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WeservConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}
