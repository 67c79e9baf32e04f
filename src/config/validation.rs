//! Configuration validation utilities

use super::Config;
use anyhow::anyhow;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Base URL is empty or whitespace-only
    EmptyBaseUrl,
    /// Base URL does not use http or https
    InvalidBaseUrl(String),
    /// A login was given without a token
    LoginWithoutToken,
    /// A token was given without a login
    TokenWithoutLogin,
    /// Timeout of zero seconds
    ZeroTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyBaseUrl => write!(f, "Base URL cannot be empty"),
            ValidationError::InvalidBaseUrl(url) => {
                write!(f, "Base URL must start with http:// or https://: '{}'", url)
            }
            ValidationError::LoginWithoutToken => {
                write!(f, "Login is set but token is missing")
            }
            ValidationError::TokenWithoutLogin => {
                write!(f, "Token is set but login is missing")
            }
            ValidationError::ZeroTimeout => write!(f, "Timeout must be at least one second"),
        }
    }
}

/// Validates a complete configuration object
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(url) = &config.base_url {
        if url.trim().is_empty() {
            errors.push(ValidationError::EmptyBaseUrl);
        } else if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(ValidationError::InvalidBaseUrl(url.clone()));
        }
    }

    match (&config.login, &config.token) {
        (Some(_), None) => errors.push(ValidationError::LoginWithoutToken),
        (None, Some(_)) => errors.push(ValidationError::TokenWithoutLogin),
        _ => {}
    }

    if config.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Convert validation errors to anyhow::Error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Configuration validation failed:\n{}", messages.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_config() {
        assert!(validate_config(&Config::new()).is_ok());
    }

    #[test]
    fn test_validate_base_url() {
        let config = Config {
            base_url: Some("ftp://tracker".to_string()),
            ..Config::new()
        };
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::InvalidBaseUrl("ftp://tracker".to_string())]
        );

        let config = Config {
            base_url: Some("   ".to_string()),
            ..Config::new()
        };
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::EmptyBaseUrl]
        );
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = Config {
            token: Some("abc".to_string()),
            timeout_secs: Some(0),
            ..Config::new()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::TokenWithoutLogin,
                ValidationError::ZeroTimeout
            ]
        );
    }

    #[test]
    fn test_validation_errors_to_anyhow() {
        let err = validation_errors_to_anyhow(vec![ValidationError::LoginWithoutToken]);
        let message = err.to_string();
        assert!(message.contains("Configuration validation failed"));
        assert!(message.contains("Login is set but token is missing"));
    }
}
