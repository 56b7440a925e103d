//! Application configuration.
//!
//! Base URL resolution order, highest wins: `--api-url` flag, `ETALK_API_URL`
//! environment variable, `api_url` in `~/.etalk/config.toml`, compiled
//! default.

use std::fs;

use serde::Deserialize;

use crate::util::paths::config_path;

/// Default backend address when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the e-talk backend.
    pub api_url: String,
    /// Log filter directive for the file logger.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

/// Raw shape of the config file; every field optional so partial files merge
/// over the defaults.
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    api_url: Option<String>,
    log_filter: Option<String>,
}

impl Config {
    /// Load configuration, merging file, environment, and CLI flag.
    pub fn load(cli_api_url: Option<String>) -> Self {
        let file = fs::read_to_string(config_path())
            .ok()
            .and_then(|contents| toml::from_str::<TomlConfig>(&contents).ok())
            .unwrap_or_default();
        let env_api_url = std::env::var("ETALK_API_URL").ok();

        Self::resolve(cli_api_url, env_api_url, file)
    }

    fn resolve(
        cli_api_url: Option<String>,
        env_api_url: Option<String>,
        file: TomlConfig,
    ) -> Self {
        let mut config = Config::default();
        if let Some(filter) = file.log_filter {
            config.log_filter = filter;
        }
        if let Some(url) = cli_api_url.or(env_api_url).or(file.api_url) {
            if !url.trim().is_empty() {
                config.api_url = url;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_any_source() {
        let config = Config::resolve(None, None, TomlConfig::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_cli_flag_beats_env_and_file() {
        let file = TomlConfig {
            api_url: Some("http://file:1".to_string()),
            log_filter: None,
        };
        let config = Config::resolve(
            Some("http://cli:3".to_string()),
            Some("http://env:2".to_string()),
            file,
        );
        assert_eq!(config.api_url, "http://cli:3");
    }

    #[test]
    fn test_env_beats_file() {
        let file = TomlConfig {
            api_url: Some("http://file:1".to_string()),
            log_filter: None,
        };
        let config = Config::resolve(None, Some("http://env:2".to_string()), file);
        assert_eq!(config.api_url, "http://env:2");
    }

    #[test]
    fn test_blank_override_falls_back_to_default() {
        let config = Config::resolve(Some("  ".to_string()), None, TomlConfig::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_partial_file_parses() {
        let file: TomlConfig = toml::from_str(r#"log_filter = "debug""#).unwrap();
        let config = Config::resolve(None, None, file);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
