//! Rich-text conversion and detail-document assembly.
//!
//! Jira returns the description both raw and server-rendered (HTML, under
//! `renderedFields`). The rendered form is converted to markdown so the
//! terminal renderer has a portable markup to work from; constructs html2md
//! cannot express degrade to their plain text. The assembled document is
//! plain markdown: heading, description, then Subtasks and Comments sections
//! only when they have entries.

use crate::error::{JixError, Result};
use crate::issue::IssueDetail;

/// Convert the issue description to markdown.
///
/// Preference order: rendered HTML (converted), raw description text,
/// placeholder. A rendered description that converts to nothing with no raw
/// fallback is a conversion failure, fatal for this issue.
pub fn description_markdown(detail: &IssueDetail) -> Result<String> {
    if let Some(html) = non_blank(detail.rendered.description.as_deref()) {
        let markdown = html2md::parse_html(html);
        if let Some(md) = non_blank(Some(markdown.as_str())) {
            return Ok(md.trim().to_string());
        }
        // Converter produced nothing from real input; fall back to the raw
        // text if the tracker sent one.
        return match non_blank(detail.fields.description.as_deref()) {
            Some(raw) => Ok(raw.trim().to_string()),
            None => Err(JixError::convert(format!(
                "rendered description ({} bytes of HTML) converted to empty markdown",
                html.len()
            ))),
        };
    }

    match non_blank(detail.fields.description.as_deref()) {
        Some(raw) => Ok(raw.trim().to_string()),
        None => Ok("_No description._".to_string()),
    }
}

/// Assemble the full markdown document for one issue.
pub fn assemble_document(detail: &IssueDetail) -> Result<String> {
    let mut doc = format!("# {}: {}\n\n", detail.key, detail.fields.summary);
    doc.push_str(&description_markdown(detail)?);
    doc.push('\n');

    if !detail.fields.subtasks.is_empty() {
        doc.push_str("\n## Subtasks\n\n");
        for subtask in &detail.fields.subtasks {
            match non_blank(subtask.fields.description.as_deref()) {
                Some(desc) => {
                    doc.push_str(&format!("- **{}**: {}\n", subtask.fields.summary, desc.trim()))
                }
                None => doc.push_str(&format!("- **{}**\n", subtask.fields.summary)),
            }
        }
    }

    let comments = &detail.fields.comment.comments;
    if !comments.is_empty() {
        doc.push_str("\n## Comments\n\n");
        for comment in comments {
            doc.push_str(&format!(
                "- *{}*: {}\n",
                comment.author.display_name,
                comment.body.trim()
            ));
        }
    }

    Ok(doc)
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{
        Author, Comment, CommentPage, DetailFields, RenderedFields, Subtask, SubtaskFields,
    };

    fn detail(key: &str, summary: &str) -> IssueDetail {
        IssueDetail {
            key: key.to_string(),
            fields: DetailFields {
                summary: summary.to_string(),
                description: None,
                subtasks: vec![],
                comment: CommentPage { comments: vec![] },
            },
            rendered: RenderedFields { description: None },
        }
    }

    #[test]
    fn test_rendered_html_converts_to_markdown() {
        let mut d = detail("AB-1", "title");
        d.rendered.description =
            Some("<h2>Steps</h2><ul><li>one</li><li>two</li></ul>".to_string());
        let md = description_markdown(&d).unwrap();
        assert!(md.contains("Steps"));
        assert!(md.contains("one"));
    }

    #[test]
    fn test_missing_description_gets_placeholder() {
        let d = detail("AB-1", "title");
        assert_eq!(description_markdown(&d).unwrap(), "_No description._");
    }

    #[test]
    fn test_raw_description_used_without_rendered_form() {
        let mut d = detail("AB-1", "title");
        d.fields.description = Some("plain text body\n".to_string());
        assert_eq!(description_markdown(&d).unwrap(), "plain text body");
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let doc = assemble_document(&detail("AB-1", "no extras")).unwrap();
        assert!(doc.starts_with("# AB-1: no extras\n"));
        assert!(!doc.contains("## Subtasks"));
        assert!(!doc.contains("## Comments"));
    }

    #[test]
    fn test_sections_render_when_present() {
        let mut d = detail("AB-2", "busy issue");
        d.fields.subtasks = vec![
            Subtask {
                key: "AB-3".to_string(),
                fields: SubtaskFields {
                    summary: "first step".to_string(),
                    description: Some("details".to_string()),
                },
            },
            Subtask {
                key: "AB-4".to_string(),
                fields: SubtaskFields {
                    summary: "second step".to_string(),
                    description: None,
                },
            },
        ];
        d.fields.comment.comments = vec![Comment {
            author: Author {
                display_name: "Dana Review".to_string(),
            },
            body: "looks good".to_string(),
        }];

        let doc = assemble_document(&d).unwrap();
        assert!(doc.contains("## Subtasks"));
        assert!(doc.contains("- **first step**: details"));
        assert!(doc.contains("- **second step**\n"));
        assert!(doc.contains("## Comments"));
        assert!(doc.contains("- *Dana Review*: looks good"));
    }
}
