//! Jira REST client
//!
//! Thin wrapper over the v2 REST API covering exactly the two calls the
//! pipeline needs: a JQL search and a single-issue detail fetch with
//! server-rendered rich-text fields.

use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::debug;

use crate::endpoint::Endpoint;
use crate::error::{JixError, Result};
use crate::issue::{Issue, IssueDetail};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<Issue>,
}

/// Jira API client for one endpoint
pub struct JiraClient {
    client: Client,
    endpoint: Endpoint,
}

impl JiraClient {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Bearer auth by default; basic auth when a username is configured.
    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.endpoint.username {
            Some(user) => req.basic_auth(user, Some(&self.endpoint.token)),
            None => req.bearer_auth(&self.endpoint.token),
        }
    }

    /// Execute a JQL query and return issues in tracker order.
    ///
    /// An empty (or all-whitespace) expression is a caller error and is
    /// rejected before any network I/O. Tracker-side rejection is fatal to
    /// the query; nothing is retried.
    pub async fn search(&self, jql: &str) -> Result<Vec<Issue>> {
        if jql.trim().is_empty() {
            return Err(JixError::EmptyQuery);
        }

        let url = self.endpoint.api_url("search");
        debug!(%url, "searching issues");

        let response = self
            .authed(self.client.get(&url))
            .query(&[("jql", jql), ("fields", "summary,status")])
            .send()
            .await
            .map_err(|e| JixError::query(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(JixError::query(format!(
                "{} from tracker: {}",
                status,
                truncate(&body, 500)
            )));
        }

        let data: SearchResponse = response
            .json()
            .await
            .map_err(|e| JixError::query(format!("invalid search response: {e}")))?;

        Ok(data.issues)
    }

    /// Fetch one issue with its server-rendered rich-text fields.
    pub async fn get_detail(&self, key: &str) -> Result<IssueDetail> {
        let url = self.endpoint.api_url(&format!("issue/{key}"));
        debug!(%url, "fetching issue detail");

        let response = self
            .authed(self.client.get(&url))
            .query(&[
                ("expand", "renderedFields"),
                ("fields", "summary,description,subtasks,comment"),
            ])
            .send()
            .await
            .map_err(|e| JixError::fetch(key, format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(JixError::fetch(
                key,
                format!("{} from tracker: {}", status, truncate(&body, 500)),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| JixError::fetch(key, format!("invalid issue response: {e}")))
    }
}

/// Cap error bodies so tracker responses don't flood the terminal.
fn truncate(text: &str, max: usize) -> String {
    if text.len() > max {
        let mut end = max;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    } else {
        text.to_string()
    }
}
