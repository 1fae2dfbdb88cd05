//! Configuration management.
//!
//! Settings come from an optional TOML file with environment overrides.
//! The file path is `$PROSECHECK_CONFIG` when set, otherwise
//! `prosecheck/config.toml` under the user config directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default bind address for the web server.
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Address the web server listens on (host:port).
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Settings {
    /// Load settings from the config file, falling back to defaults.
    /// `PROSECHECK_BIND` overrides the file value.
    pub fn load() -> Self {
        let mut settings = match config_path() {
            Some(path) if path.exists() => match std::fs::read_to_string(&path) {
                Ok(raw) => match toml::from_str(&raw) {
                    Ok(parsed) => parsed,
                    Err(err) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %err,
                            "ignoring invalid config file"
                        );
                        Settings::default()
                    }
                },
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "ignoring unreadable config file"
                    );
                    Settings::default()
                }
            },
            _ => Settings::default(),
        };

        if let Ok(bind) = std::env::var("PROSECHECK_BIND") {
            settings.bind = bind;
        }
        settings
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("PROSECHECK_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("prosecheck").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.bind, DEFAULT_BIND);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.bind, DEFAULT_BIND);
    }

    #[test]
    fn test_file_value_parses() {
        let settings: Settings = toml::from_str(r#"bind = "0.0.0.0:9000""#).unwrap();
        assert_eq!(settings.bind, "0.0.0.0:9000");
    }
}
