//! Single-issue detail rendering; also the target of the fzf preview pane.

use anyhow::Result;
use jix_core::{assemble_document, render_markdown, Endpoint, JiraClient};

/// Fetch and render each key in order. The first failure aborts the batch;
/// typical batch size is one, so partial-failure continuation isn't worth
/// its complexity.
pub async fn run_view(keys: &[String], endpoint: Endpoint) -> Result<()> {
    let client = JiraClient::new(endpoint);
    for key in keys {
        let detail = client.get_detail(key).await?;
        let document = assemble_document(&detail)?;
        print!("{}", render_markdown(&document));
    }
    Ok(())
}
