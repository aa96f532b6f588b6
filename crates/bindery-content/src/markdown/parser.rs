//! Markdown structure parsing utilities.
//!
//! Extracts structural elements from markdown content using
//! `pulldown-cmark` events:
//!
//! - First heading (title fallback for pages without a `title` field)
//! - First paragraph (description fallback)
//! - All second-level headings (table-of-contents source)
//!
//! # Example
//!
//! ```rust
//! use bindery_content::markdown::{extract_first_heading, section_headings};
//! use pulldown_cmark::HeadingLevel;
//!
//! let content = "# Day One\n\nIntro.\n\n## Setup\n\n## Exercises\n";
//!
//! let (level, title) = extract_first_heading(content).unwrap();
//! assert_eq!(level, HeadingLevel::H1);
//! assert_eq!(title, "Day One");
//!
//! assert_eq!(section_headings(content), vec!["Setup", "Exercises"]);
//! ```

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Extract the first heading from markdown content.
///
/// Returns the heading level and text. Inline formatting (bold, italic,
/// links, inline code) is stripped from the heading text.
pub fn extract_first_heading(content: &str) -> Option<(HeadingLevel, String)> {
    let parser = Parser::new(content);
    let mut in_heading = false;
    let mut heading_level = HeadingLevel::H1;
    let mut heading_text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = true;
                heading_level = level;
                heading_text.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                if in_heading && !heading_text.is_empty() {
                    return Some((heading_level, heading_text.trim().to_string()));
                }
                in_heading = false;
            }
            Event::Text(text) | Event::Code(text) if in_heading => {
                heading_text.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak if in_heading => {
                heading_text.push(' ');
            }
            _ => {}
        }
    }

    None
}

/// Extract the first paragraph from markdown content.
///
/// Skips headings and returns the first actual paragraph, with inline
/// formatting stripped, truncated to `max_chars` on a word boundary.
pub fn extract_first_paragraph(content: &str, max_chars: usize) -> Option<String> {
    let parser = Parser::new(content);
    let mut in_paragraph = false;
    let mut in_heading = false;
    let mut paragraph_text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::End(TagEnd::Heading(_)) => in_heading = false,

            Event::Start(Tag::Paragraph) if !in_heading => {
                in_paragraph = true;
                paragraph_text.clear();
            }
            Event::End(TagEnd::Paragraph) if in_paragraph => {
                let trimmed = paragraph_text.trim();
                if !trimmed.is_empty() {
                    return Some(truncate_text(trimmed, max_chars));
                }
                in_paragraph = false;
            }

            Event::Text(text) | Event::Code(text) if in_paragraph => {
                paragraph_text.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak if in_paragraph => {
                paragraph_text.push(' ');
            }

            _ => {}
        }
    }

    None
}

/// Collect the text of every second-level (`##`) heading, in document order.
///
/// These are the entries a page's table of contents links to. Inline
/// formatting is stripped.
pub fn section_headings(content: &str) -> Vec<String> {
    let parser = Parser::new(content);
    let mut headings = Vec::new();
    let mut in_section_heading = false;
    let mut text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) if level == HeadingLevel::H2 => {
                in_section_heading = true;
                text.clear();
            }
            Event::End(TagEnd::Heading(HeadingLevel::H2)) if in_section_heading => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    headings.push(trimmed.to_string());
                }
                in_section_heading = false;
            }
            Event::Text(t) | Event::Code(t) if in_section_heading => {
                text.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if in_section_heading => {
                text.push(' ');
            }
            _ => {}
        }
    }

    headings
}

/// Truncate text to a maximum length, adding "..." if truncated.
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.len() <= max_chars {
        text.to_string()
    } else {
        // Back up to a word boundary near max_chars
        let truncate_at = text[..max_chars]
            .rfind(|c: char| c.is_whitespace())
            .unwrap_or(max_chars);

        format!("{}...", text[..truncate_at].trim())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // extract_first_heading tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_h1_heading() {
        let content = "# Workshop Day One\n\nSome content";
        let (level, text) = extract_first_heading(content).unwrap();
        assert_eq!(level, HeadingLevel::H1);
        assert_eq!(text, "Workshop Day One");
    }

    #[test]
    fn test_extract_heading_with_formatting() {
        let content = "# Cleaning **messy** tables\n\nBody";
        let (_, text) = extract_first_heading(content).unwrap();
        assert_eq!(text, "Cleaning messy tables");
    }

    #[test]
    fn test_extract_heading_with_inline_code() {
        let content = "## Using `extract_table`\n\nExplanation";
        let (level, text) = extract_first_heading(content).unwrap();
        assert_eq!(level, HeadingLevel::H2);
        assert_eq!(text, "Using extract_table");
    }

    #[test]
    fn test_extract_heading_skips_initial_text() {
        let content = "Lead-in paragraph.\n\n## First Real Heading\n\nBody";
        let (level, text) = extract_first_heading(content).unwrap();
        assert_eq!(level, HeadingLevel::H2);
        assert_eq!(text, "First Real Heading");
    }

    #[test]
    fn test_extract_heading_none() {
        assert!(extract_first_heading("Just paragraph text.").is_none());
    }

    // ------------------------------------------------------------------------
    // extract_first_paragraph tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_paragraph_after_heading() {
        let content = "# Title\n\nThe first paragraph.\n\nThe second.";
        let para = extract_first_paragraph(content, 100).unwrap();
        assert_eq!(para, "The first paragraph.");
    }

    #[test]
    fn test_extract_paragraph_strips_formatting() {
        let content = "# Title\n\nHas **bold** and *italic* text.\n\nMore.";
        let para = extract_first_paragraph(content, 100).unwrap();
        assert_eq!(para, "Has bold and italic text.");
    }

    #[test]
    fn test_extract_paragraph_truncates() {
        let content = "# Title\n\nA longer paragraph that should be cut off somewhere.\n";
        let para = extract_first_paragraph(content, 20).unwrap();
        assert!(para.len() <= 23);
        assert!(para.ends_with("..."));
    }

    #[test]
    fn test_extract_paragraph_none() {
        assert!(extract_first_paragraph("# Only a Heading", 100).is_none());
    }

    // ------------------------------------------------------------------------
    // section_headings tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_section_headings_in_order() {
        let content = "# Page\n\n## Setup\n\ntext\n\n## Exercises\n\ntext\n\n## Wrap-up\n";
        assert_eq!(section_headings(content), vec!["Setup", "Exercises", "Wrap-up"]);
    }

    #[test]
    fn test_section_headings_ignores_other_levels() {
        let content = "# Top\n\n## Kept\n\n### Nested\n\n#### Deeper\n";
        assert_eq!(section_headings(content), vec!["Kept"]);
    }

    #[test]
    fn test_section_headings_strips_formatting() {
        let content = "## Working with `pandas`\n";
        assert_eq!(section_headings(content), vec!["Working with pandas"]);
    }

    #[test]
    fn test_section_headings_empty() {
        assert!(section_headings("No headings here.").is_empty());
        assert!(section_headings("").is_empty());
    }

    // ------------------------------------------------------------------------
    // Edge cases
    // ------------------------------------------------------------------------

    #[test]
    fn test_unicode_content() {
        let content = "# 表の抽出\n\nこれは最初の段落です。";
        let (_, title) = extract_first_heading(content).unwrap();
        assert_eq!(title, "表の抽出");

        let para = extract_first_paragraph(content, 100).unwrap();
        assert_eq!(para, "これは最初の段落です。");
    }
}
