//! Issue tracker API client library
//!
//! This library provides a small interface for browsing the issues of a
//! repository hosted on a GitHub-style tracker (API v2 URL layout).
//!
//! ## Modules
//!
//! - [`client`]: Core `IssueBrowser` client and transport setup
//! - [`issues`]: Issue browsing operations
//! - [`endpoints`]: URL template table for the tracker API
//! - [`auth`]: Credentials handling
//! - [`types`]: Issue, repository and envelope records
//! - [`error`]: Error type shared by all operations
//! - [`util`]: Repository reference parsing

mod auth;
mod client;
mod endpoints;
mod error;
mod issues;
mod types;
mod util;

// Re-export public API
pub use auth::{Credentials, IssueRequest};
pub use client::IssueBrowser;
pub use endpoints::{DEFAULT_BASE_URL, Endpoint};
pub use error::{Error, Result};
pub use types::{Issue, IssuesResponse, Repository};
pub use util::parse_repository;
