//! Central constants for the issues application

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "issues.yaml";
}

/// Environment variables that override configuration values
pub mod env {
    pub const BASE_URL: &str = "ISSUES_BASE_URL";
    pub const LOGIN: &str = "GITHUB_LOGIN";
    pub const TOKEN: &str = "GITHUB_TOKEN";
}

/// Logging defaults
pub mod logging {
    /// Filter used when RUST_LOG is unset
    pub const DEFAULT_FILTER: &str = "warn";

    /// Filter used with --verbose
    pub const VERBOSE_FILTER: &str = "issues=debug,issues_github=debug";
}
