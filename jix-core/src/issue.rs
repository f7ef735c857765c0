//! Issue wire types and display-line formatting.
//!
//! The search payload yields `Issue` (key, summary, status); a detail fetch
//! with `expand=renderedFields` yields `IssueDetail`, which additionally
//! carries the server-rendered HTML description, subtasks, and comments.

use serde::Deserialize;

/// One issue row from a search response
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub key: String,
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub status: Status,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub name: String,
}

/// Full issue payload for the detail view
#[derive(Debug, Clone, Deserialize)]
pub struct IssueDetail {
    pub key: String,
    pub fields: DetailFields,
    /// Server-rendered counterparts of rich-text fields (HTML)
    #[serde(rename = "renderedFields", default)]
    pub rendered: RenderedFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub comment: CommentPage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderedFields {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Subtask {
    pub key: String,
    pub fields: SubtaskFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubtaskFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentPage {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

impl Issue {
    /// Format one selectable line: `KEY ('Status'): summary`.
    ///
    /// The key is always the token before the first space, so
    /// [`extract_key`] can recover it from a chosen line. Keys themselves
    /// must be space-free for the format to stay unambiguous.
    pub fn display_line(&self) -> String {
        format!(
            "{} ('{}'): {}",
            self.key, self.fields.status.name, self.fields.summary
        )
    }
}

/// Recover the issue key from a display line (token before the first space).
pub fn extract_key(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or(line)
}
