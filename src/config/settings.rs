// Configuration structs

use super::colors::ColorScheme;
use super::constants::{DEFAULT_EDITOR, DEFAULT_POLL_TIMEOUT_MS, MAX_POLL_TIMEOUT_MS};
use crate::fs::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The config file as written by the user. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Editor command, e.g. `"nvim"` or `"code -w"`
    #[serde(default)]
    pub editor: Option<String>,

    /// Directories the session starts with (`~` is expanded)
    #[serde(default)]
    pub start_dirs: Option<Vec<String>>,

    #[serde(default)]
    pub show_hidden: Option<bool>,

    #[serde(default)]
    pub poll_timeout_ms: Option<u64>,

    #[serde(default)]
    pub colors: Option<ColorScheme>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Editor command used for file edits
    pub editor: String,

    /// Tracked directories, in order
    pub start_dirs: Vec<PathBuf>,

    /// Show dot-files from the start
    pub show_hidden: bool,

    /// How long one key poll waits
    pub poll_timeout_ms: u64,

    pub colors: ColorScheme,

    /// Home directory (`/` when it cannot be determined)
    pub home: PathBuf,
}

impl Config {
    /// Built-in defaults for the given home directory.
    pub fn with_home(home: PathBuf) -> Self {
        Self {
            editor: DEFAULT_EDITOR.to_string(),
            start_dirs: default_start_dirs(&home),
            show_hidden: false,
            poll_timeout_ms: DEFAULT_POLL_TIMEOUT_MS,
            colors: ColorScheme::default(),
            home,
        }
    }

    /// Layer the config file and `$EDITOR` over the defaults. The file's
    /// `editor` wins over the environment.
    pub fn resolve(file: FileConfig, env_editor: Option<String>, home: PathBuf) -> Self {
        let mut config = Self::with_home(home);

        let env_editor = env_editor.filter(|editor| !editor.trim().is_empty());
        if let Some(editor) = file.editor.or(env_editor) {
            config.editor = editor;
        }
        if let Some(dirs) = file.start_dirs {
            config.start_dirs = dirs
                .iter()
                .map(|dir| paths::expand_tilde(dir, &config.home))
                .collect();
        }
        if let Some(show_hidden) = file.show_hidden {
            config.show_hidden = show_hidden;
        }
        if let Some(timeout) = file.poll_timeout_ms {
            config.poll_timeout_ms = timeout;
        }
        if let Some(colors) = file.colors {
            config.colors = colors;
        }
        config
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.editor.trim().is_empty() {
            anyhow::bail!("editor must not be empty");
        }
        if self.start_dirs.is_empty() {
            anyhow::bail!("start_dirs must name at least one directory");
        }
        if !(1..=MAX_POLL_TIMEOUT_MS).contains(&self.poll_timeout_ms) {
            anyhow::bail!(
                "poll_timeout_ms must be between 1 and {}, got {}",
                MAX_POLL_TIMEOUT_MS,
                self.poll_timeout_ms
            );
        }
        let unknown = self.colors.unknown_colors();
        if !unknown.is_empty() {
            anyhow::bail!("unknown color name(s): {}", unknown.join(", "));
        }
        Ok(())
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }

    /// Put `dir` in the first tracked slot.
    pub fn set_start_dir(&mut self, dir: PathBuf) {
        match self.start_dirs.first_mut() {
            Some(first) => *first = dir,
            None => self.start_dirs.push(dir),
        }
    }
}

/// `.`, home and `/tmp`.
fn default_start_dirs(home: &Path) -> Vec<PathBuf> {
    vec![PathBuf::from("."), home.to_path_buf(), PathBuf::from("/tmp")]
}
