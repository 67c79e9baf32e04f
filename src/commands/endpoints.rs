//! Endpoint table command implementation

use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use issues_github::{DEFAULT_BASE_URL, Endpoint};

/// Prints the URL templates of the tracker API
pub struct EndpointsCommand;

#[async_trait]
impl Command for EndpointsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let base = context
            .config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL);

        for (name, template, implemented) in endpoint_rows(base) {
            let marker = if implemented {
                "implemented".green()
            } else {
                "declared".dimmed()
            };
            println!("{:<14} {:<12} {}", name.bold(), marker, template);
        }

        Ok(())
    }
}

/// (name, full template, implemented) for every endpoint, table order
pub fn endpoint_rows(base: &str) -> Vec<(&'static str, String, bool)> {
    Endpoint::ALL
        .iter()
        .map(|endpoint| {
            (
                endpoint.name(),
                endpoint.template(base),
                endpoint.implemented(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_rows() {
        let rows = endpoint_rows("http://localhost/");
        assert_eq!(rows.len(), Endpoint::ALL.len());
        assert_eq!(
            rows[0],
            (
                "open-issues",
                "http://localhost/issues/list/{owner}/{name}/open".to_string(),
                true
            )
        );
        assert!(rows[1..].iter().all(|(_, _, implemented)| !implemented));
    }
}
