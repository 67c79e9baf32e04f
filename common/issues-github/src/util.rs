//! Repository reference parsing

use crate::error::{Error, Result};
use crate::types::Repository;

/// Parse a repository reference into a [`Repository`]
///
/// Supported formats:
/// - Short: `owner/repo`
/// - SSH: `git@github.com:owner/repo.git`
/// - HTTPS: `https://github.com/owner/repo.git`
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if the reference format is not recognized
pub fn parse_repository(reference: &str) -> Result<Repository> {
    let trimmed = reference.trim();
    let reference = trimmed.trim_end_matches('/').trim_end_matches(".git");

    // SSH: git@host:owner/repo
    if reference.starts_with("git@")
        && let Some((_, path)) = reference.split_once(':')
        && let Some(repo) = owner_and_name(path.split('/').collect())
    {
        return Ok(repo);
    }

    // HTTP(S): scheme://host/owner/repo
    if let Some((_, rest)) = reference.split_once("://") {
        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() == 3
            && let Some(repo) = owner_and_name(parts[1..].to_vec())
        {
            return Ok(repo);
        }
        return Err(invalid(trimmed));
    }

    owner_and_name(reference.split('/').collect()).ok_or_else(|| invalid(trimmed))
}

fn owner_and_name(parts: Vec<&str>) -> Option<Repository> {
    match parts.as_slice() {
        [owner, name] if !owner.is_empty() && !name.is_empty() => {
            Some(Repository::new(*owner, *name))
        }
        _ => None,
    }
}

fn invalid(reference: &str) -> Error {
    Error::invalid_argument(format!("invalid repository reference: {}", reference))
}
