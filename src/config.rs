use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "LEARNHUB_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn theme(self) -> iced::Theme {
        match self {
            ThemeChoice::Dark => iced::Theme::Dark,
            ThemeChoice::Light => iced::Theme::Light,
        }
    }
}

/// Application configuration loaded from `~/.config/learnhub/config.toml`.
///
/// Every key is optional; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeChoice,
    /// How long a toast stays on screen.
    pub toast_seconds: u64,
    /// Maximum number of toasts shown at once.
    pub max_toasts: usize,
    /// Width of a course card in the grid, in logical pixels.
    pub card_width: f32,
    /// Optional JSON catalog replacing the built-in courses at startup.
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Dark,
            toast_seconds: 3,
            max_toasts: 3,
            card_width: 320.0,
            catalog_path: None,
        }
    }
}

/// Where the config file is looked up.
/// `LEARNHUB_CONFIG` wins over the platform config directory.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir().map(|mut path| {
        path.push("learnhub");
        path.push("config.toml");
        path
    })
}

/// Load configuration from `path`. A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: AppConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Load the configuration, falling back to defaults on any failure
pub fn load_or_default() -> AppConfig {
    let Some(path) = config_path() else {
        tracing::warn!("no config directory available, using defaults");
        return AppConfig::default();
    };

    match load_from(&path) {
        Ok(cfg) => {
            tracing::info!("config loaded from {}", path.display());
            cfg
        }
        Err(e) => {
            tracing::warn!("ignoring config: {}", e);
            AppConfig::default()
        }
    }
}
