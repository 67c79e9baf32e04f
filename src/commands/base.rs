//! Base types and traits for the command pattern

use crate::config::Config;
use anyhow::Result;

/// Context passed to all commands containing shared configuration
#[derive(Clone)]
pub struct CommandContext {
    /// The loaded configuration, environment overrides applied
    pub config: Config,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
