//! Per-run tracker endpoint configuration.
//!
//! Built once at startup from the environment and passed by reference into
//! each component; nothing here is mutated after construction.

use crate::error::{JixError, Result};

/// Immutable connection settings for one invocation
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Tracker base URL, e.g. `https://jira.example.com` or
    /// `https://example.com/jira`
    pub base_url: String,
    /// API token; used as a bearer token, or as the basic-auth password
    /// when `username` is set
    pub token: String,
    /// Basic-auth username; bearer auth when absent
    pub username: Option<String>,
}

impl Endpoint {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            username: None,
        }
    }

    /// Read endpoint settings from JIRA_URL, JIRA_TOKEN and optional
    /// JIRA_USER.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("JIRA_URL")
            .map_err(|_| JixError::config("expect JIRA_URL in environment"))?;
        let token = std::env::var("JIRA_TOKEN")
            .map_err(|_| JixError::config("expect JIRA_TOKEN in environment"))?;
        let username = std::env::var("JIRA_USER").ok();
        Ok(Self {
            base_url,
            token,
            username,
        })
    }

    /// Join `segment` onto the base URL, collapsing duplicate slashes.
    /// Nothing is percent-encoded; issue keys must already be URL-safe.
    pub fn join(&self, segment: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let segment = segment.trim_matches('/');
        format!("{base}/{segment}")
    }

    /// Browse URL for one issue key: `<base>/browse/<key>`.
    pub fn browse_url(&self, key: &str) -> String {
        self.join(&format!("browse/{key}"))
    }

    /// REST API URL under `<base>/rest/api/2/`.
    pub fn api_url(&self, path: &str) -> String {
        self.join(&format!("rest/api/2/{}", path.trim_start_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_url() {
        let ep = Endpoint::new("https://jira.example.com", "t");
        assert_eq!(
            ep.browse_url("ABC-123"),
            "https://jira.example.com/browse/ABC-123"
        );
    }

    #[test]
    fn test_browse_url_collapses_trailing_slash() {
        let ep = Endpoint::new("https://jira.example.com/", "t");
        assert_eq!(
            ep.browse_url("AB-1"),
            "https://jira.example.com/browse/AB-1"
        );
    }

    #[test]
    fn test_browse_url_keeps_context_path() {
        let ep = Endpoint::new("https://example.com/jira/", "t");
        assert_eq!(ep.browse_url("AB-1"), "https://example.com/jira/browse/AB-1");
    }

    #[test]
    fn test_api_url() {
        let ep = Endpoint::new("https://jira.example.com", "t");
        assert_eq!(
            ep.api_url("search"),
            "https://jira.example.com/rest/api/2/search"
        );
        assert_eq!(
            ep.api_url("/issue/AB-1"),
            "https://jira.example.com/rest/api/2/issue/AB-1"
        );
    }
}
