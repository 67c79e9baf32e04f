//! Configuration file loading and saving

use super::validation;
use crate::constants;
use anyhow::{Context, Result};
use issues_github::IssueBrowser;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Tracker API base URL; the public v2 API when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("login", &self.login)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        // An empty document deserializes to unit, not a mapping
        let config: Config = if content.trim().is_empty() {
            Config::new()
        } else {
            serde_yaml::from_str(&content)?
        };

        validation::validate_config(&config).map_err(validation::validation_errors_to_anyhow)?;

        Ok(config)
    }

    /// Alias for [`Config::load`]
    pub fn load_config(path: &str) -> Result<Self> {
        Self::load(path)
    }

    /// Load configuration if the file exists, defaults otherwise
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path).with_context(|| format!("Failed to load config file '{}'", path))
        } else {
            debug!(path, "config file not found, using defaults");
            Ok(Self::new())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, format!("---\n{}", yaml))?;
        Ok(())
    }

    /// Override settings from the process environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override settings from `lookup`, keyed by environment variable name
    ///
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(base_url) = lookup(constants::env::BASE_URL) {
            self.base_url = Some(base_url);
        }
        if let Some(login) = lookup(constants::env::LOGIN) {
            self.login = Some(login);
        }
        if let Some(token) = lookup(constants::env::TOKEN) {
            self.token = Some(token);
        }
    }

    /// Build an issue browser from this configuration
    pub fn browser(&self) -> Result<IssueBrowser> {
        validation::validate_config(self).map_err(validation::validation_errors_to_anyhow)?;

        let mut browser = match (&self.login, &self.token) {
            (Some(login), Some(token)) => IssueBrowser::authenticated(login, token),
            _ => IssueBrowser::new(),
        };

        if let Some(base_url) = &self.base_url {
            browser = browser.with_base_url(base_url);
        }
        if let Some(secs) = self.timeout_secs {
            browser = browser.with_timeout(Duration::from_secs(secs));
        }

        Ok(browser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_apply_overrides() {
        let env: HashMap<&str, &str> = [
            ("ISSUES_BASE_URL", "http://localhost:8080/"),
            ("GITHUB_LOGIN", "octocat"),
            ("GITHUB_TOKEN", ""),
        ]
        .into_iter()
        .collect();

        let mut config = Config {
            token: Some("from-file".to_string()),
            ..Config::new()
        };
        config.apply_overrides(|key| env.get(key).map(|value| value.to_string()));

        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080/"));
        assert_eq!(config.login.as_deref(), Some("octocat"));
        // empty values leave the file setting in place
        assert_eq!(config.token.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_debug_hides_token() {
        let config = Config {
            login: Some("octocat".to_string()),
            token: Some("very-secret".to_string()),
            ..Config::new()
        };
        let debug = format!("{:?}", config);
        assert!(debug.contains("octocat"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("very-secret"));

        let debug = format!("{:?}", Config::new());
        assert!(debug.contains("token: None"));
    }

    #[test]
    fn test_browser_anonymous_by_default() {
        let browser = Config::new().browser().unwrap();
        assert!(!browser.is_authenticated());
        assert_eq!(browser.base_url(), issues_github::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_browser_authenticated() {
        let config = Config {
            base_url: Some("https://tracker.example.com/api/v2/json/".to_string()),
            login: Some("octocat".to_string()),
            token: Some("abc".to_string()),
            timeout_secs: Some(5),
        };
        let browser = config.browser().unwrap();
        assert!(browser.is_authenticated());
        assert_eq!(
            browser.base_url(),
            "https://tracker.example.com/api/v2/json/"
        );
    }

    #[test]
    fn test_browser_rejects_half_credentials() {
        let config = Config {
            login: Some("octocat".to_string()),
            ..Config::new()
        };
        assert!(config.browser().is_err());
    }
}
