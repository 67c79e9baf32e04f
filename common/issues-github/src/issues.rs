//! Issue browsing operations

use crate::client::IssueBrowser;
use crate::endpoints::Endpoint;
use crate::error::{Error, Result};
use crate::types::{Issue, IssuesResponse, Repository};
use reqwest::header::ACCEPT;
use tracing::{debug, instrument};

impl IssueBrowser {
    /// Browse the open issues of a repository
    ///
    /// # Arguments
    /// * `repository` - Repository whose open issues are listed
    ///
    /// # Returns
    /// The issues in the order the tracker delivered them; an empty list when
    /// the response carries no issues
    ///
    /// # Errors
    /// Returns an error if:
    /// - The repository owner or name is blank (no request is made)
    /// - The request fails or the tracker answers with a non-success status
    /// - The response body is not an issue envelope
    #[instrument(skip(self, repository), fields(repository = %repository))]
    pub async fn browse_open(&self, repository: &Repository) -> Result<Vec<Issue>> {
        repository.validate()?;

        let url = Endpoint::OpenIssues.expand(
            &self.base_url,
            &[
                ("owner", repository.owner.as_str()),
                ("name", repository.name.as_str()),
            ],
        )?;
        debug!(%url, "requesting open issues");

        let client = self.init_transport()?;
        let response = client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let issues = decode_envelope(&body)?
            .map(IssuesResponse::into_issues)
            .unwrap_or_default();
        debug!(count = issues.len(), "received open issues");
        Ok(issues)
    }
}

/// Decode an envelope; an empty or `null` body yields `None`
fn decode_envelope(body: &str) -> Result<Option<IssuesResponse>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope_absent_body() {
        assert!(decode_envelope("").unwrap().is_none());
        assert!(decode_envelope("  \n").unwrap().is_none());
        assert!(decode_envelope("null").unwrap().is_none());
    }

    #[test]
    fn test_decode_envelope_preserves_order() {
        let envelope = decode_envelope(
            r#"{"issues":[{"number":3,"title":"c"},{"number":1,"title":"a"},{"number":2,"title":"b"}]}"#,
        )
        .unwrap()
        .unwrap();
        let numbers: Vec<u64> = envelope
            .into_issues()
            .iter()
            .map(|issue| issue.number)
            .collect();
        assert_eq!(numbers, vec![3, 1, 2]);
    }

    #[test]
    fn test_decode_envelope_wrong_shape() {
        assert!(matches!(
            decode_envelope(r#"{"issues":"nope"}"#),
            Err(Error::Decode(_))
        ));
        assert!(matches!(decode_envelope("<html>"), Err(Error::Decode(_))));
    }
}
