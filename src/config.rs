//! Application-level configuration loading, including the roster capacity.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "MATCHDAY_BACK_CONFIG_PATH";
/// Roster slots created when the configuration does not say otherwise.
const DEFAULT_ROSTER_CAPACITY: u32 = 27;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    roster_capacity: u32,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the
    /// baked-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        capacity = app_config.roster_capacity,
                        "loaded roster configuration"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Number of roster slots the store is seeded with.
    pub fn roster_capacity(&self) -> u32 {
        self.roster_capacity
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster_capacity: DEFAULT_ROSTER_CAPACITY,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at
/// [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    roster_capacity: Option<u32>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            roster_capacity: value.roster_capacity.unwrap_or(DEFAULT_ROSTER_CAPACITY),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_27_slots() {
        assert_eq!(AppConfig::default().roster_capacity(), 27);
    }

    #[test]
    fn missing_capacity_falls_back_to_default() {
        let raw: RawConfig = serde_json::from_str("{}").unwrap();
        let config: AppConfig = raw.into();
        assert_eq!(config.roster_capacity(), DEFAULT_ROSTER_CAPACITY);
    }

    #[test]
    fn explicit_capacity_is_honored() {
        let raw: RawConfig = serde_json::from_str(r#"{"roster_capacity": 18}"#).unwrap();
        let config: AppConfig = raw.into();
        assert_eq!(config.roster_capacity(), 18);
    }
}
