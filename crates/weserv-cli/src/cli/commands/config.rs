//! `weserv config path|show` – inspect configuration.

use anyhow::Result;
use std::path::Path;
use weserv_core::config::{self, WeservConfig};

/// Print the config file in use: the `--config` override, else the XDG path.
pub fn run_config_path(override_path: Option<&Path>) -> Result<()> {
    match override_path {
        Some(p) => println!("{}", p.display()),
        None => println!("{}", config::config_path()?.display()),
    }
    Ok(())
}

pub fn run_config_show(cfg: &WeservConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
