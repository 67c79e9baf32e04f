//! Command implementations

pub mod base;
pub mod endpoints;
pub mod open;

pub use base::{Command, CommandContext};
pub use endpoints::EndpointsCommand;
pub use open::OpenCommand;
