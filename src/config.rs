use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::autosave::DEFAULT_INTERVAL_SECS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_notes_dir")]
    pub notes_dir: String,
    #[serde(default)]
    pub autosave: AutosaveConfig,
}

/// Initial autosave settings for a session. The runtime toggles are
/// session-only and never written back here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutosaveConfig {
    #[serde(default = "default_autosave_enabled")]
    pub enabled: bool,
    #[serde(default = "default_autosave_interval")]
    pub interval_secs: u64,
}

fn default_notes_dir() -> String {
    "~/Documents/jotter".to_string()
}
fn default_autosave_enabled() -> bool {
    false
}
fn default_autosave_interval() -> u64 {
    DEFAULT_INTERVAL_SECS
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            enabled: default_autosave_enabled(),
            interval_secs: default_autosave_interval(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_dir: default_notes_dir(),
            autosave: AutosaveConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let config_path = Self::config_path();
        if config_path.exists() {
            match fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => eprintln!("Failed to parse config: {}", e),
                },
                Err(e) => eprintln!("Failed to read config: {}", e),
            }
        }
        Self::default()
    }

    /// Loads the config, writing a default file first if none exists.
    pub fn load_or_create() -> Self {
        let config_dir = Self::config_dir();
        if !config_dir.exists() {
            let _ = fs::create_dir_all(&config_dir);
        }

        if !Self::config_path().exists() {
            let _ = Self::default().save();
        }
        Self::load()
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("jotter")
    }

    pub fn save(&self) -> std::io::Result<()> {
        let config_dir = Self::config_dir();
        fs::create_dir_all(&config_dir)?;
        let toml_string = toml::to_string_pretty(self).unwrap_or_else(|_| String::new());
        fs::write(Self::config_path(), toml_string)?;
        Ok(())
    }

    /// The notes directory with `~` expanded.
    pub fn notes_path(&self) -> PathBuf {
        let path = shellexpand::tilde(&self.notes_dir).to_string();
        PathBuf::from(path)
    }
}
