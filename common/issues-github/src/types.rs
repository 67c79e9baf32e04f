//! Records exchanged with the issue tracker

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// A remote project, identified by its owner and name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Check that both owner and name are usable as path parameters
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if either field is blank or a
    /// dot segment (`.` or `..`)
    pub fn validate(&self) -> Result<()> {
        validate_segment("owner", &self.owner)?;
        validate_segment("name", &self.name)
    }

    /// `owner/name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

fn validate_segment(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(format!(
            "repository {} must not be empty",
            field
        )));
    }
    // Dot segments are collapsed by URL normalization
    if value == "." || value == ".." {
        return Err(Error::invalid_argument(format!(
            "repository {} must not be '{}'",
            field, value
        )));
    }
    Ok(())
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for Repository {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::util::parse_repository(s)
    }
}

/// An issue as delivered by the tracker
///
/// Every field falls back to its default when missing from the payload or
/// sent as `null`, and fields this record does not name are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issue {
    #[serde(deserialize_with = "null_as_default")]
    pub number: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub body: Option<String>,
    pub state: Option<String>,
    pub user: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub votes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub comments: u64,
    pub position: Option<f64>,
    pub gravatar_id: Option<String>,
    pub html_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub closed_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Envelope returned by the issue list endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssuesResponse {
    #[serde(default)]
    pub issues: Option<Vec<Issue>>,
}

impl IssuesResponse {
    /// Unwrap the envelope, treating a missing list as empty
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues.unwrap_or_default()
    }
}
