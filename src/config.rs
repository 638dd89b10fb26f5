//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default Navedex API address
pub const DEFAULT_API_URL: &str = "https://navedex-api.herokuapp.com/v1";

/// Environment variable overriding the API address
pub const API_URL_ENV: &str = "NAVEDEX_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Navedex API base URL
    pub api_base_url: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Email of the last successful sign-in
    pub last_email: Option<String>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "navedex", "navedex-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// API base URL: environment, then file, then the default
    pub fn api_base_url(&self) -> String {
        self.resolve_api_base_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_base_url(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|url| !url.is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_base_url.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.last_email.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            api_base_url: Some("http://localhost:3333".to_string()),
            request_timeout_secs: Some(5),
            last_email: Some("a@b.com".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api_base_url, Some("http://localhost:3333".to_string()));
        assert_eq!(parsed.request_timeout_secs, Some(5));
        assert_eq!(parsed.last_email, Some("a@b.com".to_string()));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"api_base_url": "http://x", "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.api_base_url, Some("http://x".to_string()));
    }

    #[test]
    fn test_api_url_precedence() {
        let config = AppConfig {
            api_base_url: Some("http://file".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_api_base_url(Some("http://env".to_string())),
            "http://env"
        );
        assert_eq!(config.resolve_api_base_url(None), "http://file");
        assert_eq!(
            config.resolve_api_base_url(Some(String::new())),
            "http://file"
        );
        assert_eq!(
            AppConfig::default().resolve_api_base_url(None),
            DEFAULT_API_URL
        );
    }

    #[test]
    fn test_request_timeout_default() {
        assert_eq!(AppConfig::default().request_timeout(), Duration::from_secs(30));
        let config = AppConfig {
            request_timeout_secs: Some(3),
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_load_returns_ok() {
        // Falls back to defaults when no config file exists
        assert!(AppConfig::load().is_ok());
    }
}
