// Configuration loader
// Loads ~/.config/megacli/config.toml (if present) and layers $EDITOR over it

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::settings::{Config, FileConfig};

/// Where the config file lives, if the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("megacli").join("config.toml"))
}

/// Load configuration from the config file and environment
pub fn load_config() -> Result<Config> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
    let env_editor = std::env::var("EDITOR").ok();
    load_config_from(config_path().as_deref(), env_editor, home)
}

/// Load from an explicit file. A missing file means defaults.
pub fn load_config_from(path: Option<&Path>, env_editor: Option<String>, home: PathBuf) -> Result<Config> {
    let file = match path {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "Reading config file");
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        _ => FileConfig::default(),
    };

    let config = Config::resolve(file, env_editor, home);
    config
        .validate()
        .context("Configuration validation failed")?;
    Ok(config)
}
