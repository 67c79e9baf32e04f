//! URL templates of the tracker API
//!
//! Every template is relative to a base URL and uses `{owner}`, `{name}`
//! and `{number}` placeholders. Only [`Endpoint::OpenIssues`] backs an
//! operation; the rest document the wire contract.

use crate::error::{Error, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Base URL of the v2 JSON API
pub const DEFAULT_BASE_URL: &str = "http://github.com/api/v2/json/";

/// Everything except RFC 3986 unreserved characters gets escaped
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    OpenIssues,
    ClosedIssues,
    Issue,
    ShowIssue,
    OpenIssue,
    CloseIssue,
    ReopenIssue,
    EditIssue,
    CommentIssue,
}

impl Endpoint {
    pub const ALL: [Endpoint; 9] = [
        Endpoint::OpenIssues,
        Endpoint::ClosedIssues,
        Endpoint::Issue,
        Endpoint::ShowIssue,
        Endpoint::OpenIssue,
        Endpoint::CloseIssue,
        Endpoint::ReopenIssue,
        Endpoint::EditIssue,
        Endpoint::CommentIssue,
    ];

    pub const fn path_template(self) -> &'static str {
        match self {
            Endpoint::OpenIssues => "issues/list/{owner}/{name}/open",
            Endpoint::ClosedIssues => "issues/list/{owner}/{name}/closed",
            Endpoint::Issue => "issues/list/{owner}/{name}/{number}",
            Endpoint::ShowIssue => "issues/show/{owner}/{name}",
            Endpoint::OpenIssue => "issues/open/{owner}/{name}",
            Endpoint::CloseIssue => "issues/close/{owner}/{name}/{number}",
            Endpoint::ReopenIssue => "issues/reopen/{owner}/{name}/{number}",
            Endpoint::EditIssue => "issues/edit/{owner}/{name}/{number}",
            Endpoint::CommentIssue => "issues/comment/{owner}/{name}/{number}",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Endpoint::OpenIssues => "open-issues",
            Endpoint::ClosedIssues => "closed-issues",
            Endpoint::Issue => "issue",
            Endpoint::ShowIssue => "show-issue",
            Endpoint::OpenIssue => "open-issue",
            Endpoint::CloseIssue => "close-issue",
            Endpoint::ReopenIssue => "reopen-issue",
            Endpoint::EditIssue => "edit-issue",
            Endpoint::CommentIssue => "comment-issue",
        }
    }

    /// Whether an `IssueBrowser` operation calls this endpoint
    pub const fn implemented(self) -> bool {
        matches!(self, Endpoint::OpenIssues)
    }

    /// Full URL template, base included
    pub fn template(self, base: &str) -> String {
        join(base, self.path_template())
    }

    /// Build the request URL for this endpoint
    ///
    /// Each `{key}` placeholder is replaced by the percent-encoded value
    /// paired with it in `params`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if a placeholder has no value
    pub fn expand(self, base: &str, params: &[(&str, &str)]) -> Result<String> {
        let mut path = self.path_template().to_string();
        for (key, value) in params {
            let placeholder = format!("{{{}}}", key);
            let encoded = utf8_percent_encode(value, PATH_SEGMENT).to_string();
            path = path.replace(&placeholder, &encoded);
        }

        if let Some(start) = path.find('{') {
            let missing = path[start..]
                .split_once('}')
                .map(|(head, _)| &head[1..])
                .unwrap_or(&path[start + 1..]);
            return Err(Error::invalid_argument(format!(
                "missing path parameter '{}' for endpoint {}",
                missing,
                self.name()
            )));
        }

        Ok(join(base, &path))
    }
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_open_issues() {
        let url = Endpoint::OpenIssues
            .expand(
                DEFAULT_BASE_URL,
                &[("owner", "octocat"), ("name", "Hello-World")],
            )
            .unwrap();
        assert_eq!(
            url,
            "http://github.com/api/v2/json/issues/list/octocat/Hello-World/open"
        );
    }

    #[test]
    fn test_expand_base_without_trailing_slash() {
        let url = Endpoint::OpenIssues
            .expand("http://localhost:8080", &[("owner", "a"), ("name", "b")])
            .unwrap();
        assert_eq!(url, "http://localhost:8080/issues/list/a/b/open");
    }

    #[test]
    fn test_expand_escapes_path_segments() {
        let url = Endpoint::OpenIssues
            .expand(
                "http://localhost/",
                &[("owner", "some one"), ("name", "a/b")],
            )
            .unwrap();
        assert_eq!(url, "http://localhost/issues/list/some%20one/a%2Fb/open");
    }

    #[test]
    fn test_expand_with_number() {
        let url = Endpoint::CommentIssue
            .expand(
                "http://localhost/",
                &[("owner", "o"), ("name", "n"), ("number", "42")],
            )
            .unwrap();
        assert_eq!(url, "http://localhost/issues/comment/o/n/42");
    }

    #[test]
    fn test_expand_missing_parameter() {
        let err = Endpoint::CloseIssue
            .expand("http://localhost/", &[("owner", "o"), ("name", "n")])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(err.to_string().contains("'number'"));
        assert!(err.to_string().contains("close-issue"));
    }

    #[test]
    fn test_only_open_issues_is_implemented() {
        let implemented: Vec<_> = Endpoint::ALL
            .iter()
            .filter(|endpoint| endpoint.implemented())
            .collect();
        assert_eq!(implemented, vec![&Endpoint::OpenIssues]);
    }

    #[test]
    fn test_template_includes_base() {
        assert_eq!(
            Endpoint::ClosedIssues.template(DEFAULT_BASE_URL),
            "http://github.com/api/v2/json/issues/list/{owner}/{name}/closed"
        );
    }
}
