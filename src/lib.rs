//! Issues - A CLI tool for browsing the issues of hosted repositories

pub mod commands;
pub mod config;
pub mod constants;
pub mod logging;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use issues_github::{Issue, IssueBrowser, Repository};

/// Load the default config file, falling back to defaults, with environment overrides applied
pub fn load_default_config() -> anyhow::Result<Config> {
    let mut config = Config::load_or_default(constants::config::DEFAULT_CONFIG_FILE)?;
    config.apply_env();
    Ok(config)
}
