pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig, TimingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("widgetboard")
        .join("config.toml")
}

/// Load the config from `path`, or from the default location when `None`.
/// A missing file at the default location yields defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = config_path();
            if !p.exists() {
                return Ok(AppConfig::default());
            }
            p
        }
    };
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}
