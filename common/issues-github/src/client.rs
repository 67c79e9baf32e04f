//! Issue browser client implementation

use crate::auth::Credentials;
use crate::endpoints::DEFAULT_BASE_URL;
use crate::error::{Error, Result};
use std::time::Duration;

const USER_AGENT: &str = concat!("issues-github/", env!("CARGO_PKG_VERSION"));

/// Client for browsing the issues of a repository
///
/// A browser holds the base URL of the tracker and, optionally, the
/// credentials of the caller. Anonymous browsers are enough for the open
/// issue listing; authenticated ones are needed for endpoints that change
/// issues.
///
/// ## Example
///
/// ```rust,no_run
/// use issues_github::{IssueBrowser, Repository};
///
/// # async fn example() -> issues_github::Result<()> {
/// let browser = IssueBrowser::new();
/// let issues = browser
///     .browse_open(&Repository::new("octocat", "Hello-World"))
///     .await?;
/// println!("{} open issues", issues.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct IssueBrowser {
    pub(crate) base_url: String,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) timeout: Option<Duration>,
}

impl IssueBrowser {
    /// Create an anonymous browser
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: None,
            timeout: None,
        }
    }

    /// Create a browser for `username` authenticating with `api_token`
    pub fn authenticated(username: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            credentials: Some(Credentials::new(username, api_token)),
            ..Self::new()
        }
    }

    /// Point the browser at another tracker, e.g. an enterprise install
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Bound each request by `timeout`; without it the transport default applies
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Build a fresh HTTP client for a single operation
    pub(crate) fn init_transport(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(Error::Transport)
    }
}

impl Default for IssueBrowser {
    fn default() -> Self {
        Self::new()
    }
}
