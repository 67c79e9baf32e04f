//! Open issues command implementation

use super::{Command, CommandContext};
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use issues_github::{Issue, Repository};
use tracing::debug;

/// Lists the open issues of a single repository
pub struct OpenCommand {
    /// Repository reference: `owner/name` or a clone URL
    pub repository: String,
    /// Output in JSON format
    pub json: bool,
}

#[async_trait]
impl Command for OpenCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let repository: Repository = self.repository.parse()?;
        let browser = context.config.browser()?;
        debug!(%repository, base_url = browser.base_url(), "browsing open issues");

        let issues = browser
            .browse_open(&repository)
            .await
            .with_context(|| format!("Failed to browse open issues of {}", repository))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&issues)?);
            return Ok(());
        }

        if issues.is_empty() {
            println!(
                "{}",
                format!("No open issues found in {}", repository).yellow()
            );
            return Ok(());
        }

        println!(
            "{}",
            format!("Found {} open issues in {}", issues.len(), repository).green()
        );
        println!();

        for issue in &issues {
            println!("{}", format_issue(issue));
        }

        Ok(())
    }
}

/// One-line summary of an issue, labels appended when present
pub fn format_issue(issue: &Issue) -> String {
    let mut line = format!(
        "{} {} {}",
        "•".blue(),
        format!("#{}", issue.number).bold(),
        issue.title
    );

    if !issue.labels.is_empty() {
        line.push_str(&format!(" [{}]", issue.labels.join(", ").cyan()));
    }

    if let Some(user) = &issue.user {
        line.push_str(&format!(" by {}", user));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_issue_minimal() {
        colored::control::set_override(false);
        let issue = Issue {
            number: 1,
            title: "Bug".to_string(),
            ..Issue::default()
        };
        assert_eq!(format_issue(&issue), "• #1 Bug");
    }

    #[test]
    fn test_format_issue_with_labels_and_user() {
        colored::control::set_override(false);
        let issue = Issue {
            number: 12,
            title: "Crash on start".to_string(),
            labels: vec!["bug".to_string(), "p1".to_string()],
            user: Some("octocat".to_string()),
            ..Issue::default()
        };
        assert_eq!(
            format_issue(&issue),
            "• #12 Crash on start [bug, p1] by octocat"
        );
    }
}
