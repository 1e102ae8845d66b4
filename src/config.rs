//! Application-level configuration loading, including the default match ruleset.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::scoring::CompletionPolicy;

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "COURTSIDE_BACK_CONFIG_PATH";

#[derive(Debug, Clone, Default)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    default_ruleset: CompletionPolicy,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        ruleset = ?app_config.default_ruleset,
                        "loaded configuration"
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

    /// Build a configuration with an explicit default ruleset.
    pub fn with_default_ruleset(default_ruleset: CompletionPolicy) -> Self {
        Self { default_ruleset }
    }

    /// Ruleset applied to matches created without one.
    pub fn default_ruleset(&self) -> CompletionPolicy {
        self.default_ruleset
    }

    /// Parse and check the JSON configuration document.
    fn from_json(contents: &str) -> Result<Self, String> {
        let raw = serde_json::from_str::<RawConfig>(contents).map_err(|err| err.to_string())?;
        let default_ruleset = raw.default_ruleset.unwrap_or_default();
        default_ruleset.check()?;
        Ok(Self { default_ruleset })
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    default_ruleset: Option<CompletionPolicy>,
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
    fn parses_a_set_ruleset() {
        let config = AppConfig::from_json(
            r#"{"default_ruleset": {"kind": "set_with_two_game_lead", "games": 6, "max_games": 7}}"#,
        )
        .unwrap();
        assert_eq!(config.default_ruleset(), CompletionPolicy::standard_set());
    }

    #[test]
    fn empty_document_uses_first_to_four() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(
            config.default_ruleset(),
            CompletionPolicy::FirstToGames { target: 4 }
        );
    }

    #[test]
    fn rejects_unreachable_ruleset() {
        let err = AppConfig::from_json(
            r#"{"default_ruleset": {"kind": "first_to_games", "target": 0}}"#,
        )
        .unwrap_err();
        assert!(err.contains("target"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(AppConfig::from_json("{not json").is_err());
    }
}
