//! Markdown to ANSI rendering for dark terminals.
//!
//! A pulldown-cmark event walk with a fixed style mapping: headings bold
//! cyan, strong bold, emphasis italic, code dark yellow. Kept deliberately
//! flat; anything the walk does not recognize falls through as plain text.

use crossterm::style::Stylize;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

pub fn render_markdown(markdown: &str) -> String {
    let mut out = String::new();
    let mut heading = false;
    let mut strong = 0usize;
    let mut emphasis = 0usize;
    let mut code_block = false;
    let mut list_depth = 0usize;

    for event in Parser::new_ext(markdown, Options::empty()) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Heading { .. } => {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    heading = true;
                }
                Tag::List(_) => list_depth += 1,
                Tag::Item => {
                    out.push_str(&"  ".repeat(list_depth.saturating_sub(1)));
                    out.push_str(&format!("{} ", "•".dark_grey()));
                }
                Tag::Emphasis => emphasis += 1,
                Tag::Strong => strong += 1,
                Tag::CodeBlock(_) => code_block = true,
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Heading(_) => {
                    heading = false;
                    out.push_str("\n\n");
                }
                TagEnd::Paragraph => out.push_str("\n\n"),
                TagEnd::List(_) => {
                    list_depth = list_depth.saturating_sub(1);
                    if list_depth == 0 {
                        out.push('\n');
                    }
                }
                TagEnd::Item => out.push('\n'),
                TagEnd::Emphasis => emphasis = emphasis.saturating_sub(1),
                TagEnd::Strong => strong = strong.saturating_sub(1),
                TagEnd::CodeBlock => {
                    code_block = false;
                    out.push('\n');
                }
                _ => {}
            },
            Event::Text(text) => {
                out.push_str(&style_text(&text, heading, strong > 0, emphasis > 0, code_block))
            }
            Event::Code(code) => out.push_str(&format!("{}", code.as_ref().dark_yellow())),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => out.push_str(&format!("{}\n\n", "────────".dark_grey())),
            _ => {}
        }
    }

    while out.ends_with('\n') {
        out.pop();
    }
    out.push('\n');
    out
}

fn style_text(text: &str, heading: bool, strong: bool, emphasis: bool, code_block: bool) -> String {
    if heading {
        format!("{}", text.dark_cyan().bold())
    } else if code_block {
        format!("{}", text.dark_yellow())
    } else if strong {
        format!("{}", text.bold())
    } else if emphasis {
        format!("{}", text.italic())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraph_text_survives() {
        let out = render_markdown("just a sentence");
        assert!(out.contains("just a sentence"));
    }

    #[test]
    fn test_heading_is_styled() {
        let out = render_markdown("# AB-1: summary");
        assert!(out.contains("AB-1: summary"));
        // crossterm styling always emits escape sequences
        assert!(out.contains('\u{1b}'));
    }

    #[test]
    fn test_list_items_get_bullets() {
        let out = render_markdown("- one\n- two\n");
        assert!(out.contains('•'));
        assert!(out.contains("one"));
        assert!(out.contains("two"));
    }

    #[test]
    fn test_output_ends_with_single_newline() {
        let out = render_markdown("text\n\n\n");
        assert!(out.ends_with('\n'));
        assert!(!out.ends_with("\n\n"));
    }
}
