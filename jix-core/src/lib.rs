//! jix-core: query, select, act pipeline for a Jira-compatible tracker.
//!
//! The binary crate wires these pieces together: `client` runs the JQL
//! query, `issue` formats selectable lines, `selector` drives the external
//! fuzzy finder, `dispatch` acts on the choice, and `convert` + `render`
//! turn one issue's rich-text detail into styled terminal output.

pub mod client;
pub mod convert;
pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod issue;
pub mod render;
pub mod selector;

pub use client::JiraClient;
pub use convert::assemble_document;
pub use dispatch::{dispatch, UrlOpener};
pub use endpoint::Endpoint;
pub use error::{JixError, Result};
pub use issue::{extract_key, Issue, IssueDetail};
pub use render::render_markdown;
pub use selector::{FuzzySelector, Selection, CANCEL_EXIT_CODE};
