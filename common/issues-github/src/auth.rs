//! Credentials for authenticated tracker operations

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Login and API token pair
///
/// The token is kept in a [`SecretString`] and never shows up in `Debug`
/// output.
pub struct Credentials {
    login: String,
    token: SecretString,
}

/// Credential form sent with authenticated requests
pub type IssueRequest = Credentials;

impl Credentials {
    pub fn new(login: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            token: SecretString::from(token.into()),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Form parameters in the shape the v2 API expects
    pub fn form(&self) -> [(&'static str, &str); 2] {
        [("login", self.login()), ("token", self.token())]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
