//! Window configuration loaded from an optional JSON file.
//!
//! Flick has no behavioral settings; the only knobs are presentation-side
//! window dimensions. Missing or malformed files fall back to defaults so
//! the app always starts.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "flick.json";

const DEFAULT_WINDOW_WIDTH: f64 = 420.0;
const DEFAULT_WINDOW_HEIGHT: f64 = 780.0;

/// Cached config (loaded once at startup)
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Resolved window configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// On-disk shape; every field optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct RawConfig {
    #[serde(default)]
    window_width: Option<f64>,
    #[serde(default)]
    window_height: Option<f64>,
}

impl AppConfig {
    /// Apply raw overrides on top of the defaults
    ///
    /// Dimensions must be finite and positive; anything else keeps the
    /// default for that field.
    fn from_raw(raw: &RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            window_width: sanitize_dimension(raw.window_width, defaults.window_width),
            window_height: sanitize_dimension(raw.window_height, defaults.window_height),
        }
    }
}

fn sanitize_dimension(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(v) => {
            tracing::warn!("Ignoring invalid window dimension {v}, using {default}");
            default
        }
        None => default,
    }
}

/// The process-wide config (loaded once at first call)
pub fn app_config() -> AppConfig {
    *APP_CONFIG.get_or_init(|| load_config_from_path(&default_config_path()))
}

/// Platform data-dir location of the optional config file
pub fn default_config_path() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flick")
        .join(CONFIG_FILE)
}

/// Load config from `path`, falling back to defaults on any failure
pub fn load_config_from_path(path: &Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }

    match read_config(path) {
        Ok(raw) => AppConfig::from_raw(&raw),
        Err(error) => {
            tracing::warn!("Failed to load config at {}: {}", path.display(), error);
            AppConfig::default()
        }
    }
}

fn read_config(path: &Path) -> flick_core::Result<RawConfig> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|error| flick_core::Error::Config(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from_path(&dir.path().join("absent.json"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_config_from_path(&path), AppConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"window_width": 500.0}"#).unwrap();

        let config = load_config_from_path(&path);
        assert_eq!(config.window_width, 500.0);
        assert_eq!(config.window_height, AppConfig::default().window_height);
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let raw = RawConfig {
            window_width: Some(-10.0),
            window_height: Some(0.0),
        };
        assert_eq!(AppConfig::from_raw(&raw), AppConfig::default());
    }
}
