use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{History, Theme};
use crate::terminal::TerminalBuffer;

pub const CONFIG_ENV: &str = "PIXALOOM_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub identity: String,
    pub banner: String,
    pub theme: Theme,
    pub site_url: String,
    pub max_scrollback: usize,
    pub history_limit: usize,
    pub projects: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            identity: "guest@pixaloom".to_string(),
            banner: "Pixaloom terminal v1.0. Type 'help' to see what I can do.".to_string(),
            theme: Theme::default(),
            site_url: "https://pixaloom.dev".to_string(),
            max_scrollback: TerminalBuffer::DEFAULT_SCROLLBACK,
            history_limit: History::DEFAULT_LIMIT,
            projects: None,
        }
    }
}

impl Config {
    /// Resolves the config file and loads it. A missing file yields the
    /// defaults; an unreadable or malformed one is logged and ignored.
    pub fn load() -> Self {
        let Some(path) = config_file() else {
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("ignoring config: {err:#}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }
}

fn config_file() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(explicit));
    }
    let base = data_dir()?;
    Some(base.join("pixaloom").join("config.json"))
}

fn data_dir() -> Option<PathBuf> {
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata));
    }
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".local").join("share"));
    }
    None
}
