//! Table-of-contents rendering.
//!
//! Published pages get a `## Table of Contents` section linking to each
//! second-level heading. Anchors must agree with the ids the HTML renderer
//! assigns, so both go through [`bindery_core::heading_anchor`].

use bindery_core::heading_anchor;

/// Render a table-of-contents markdown block for the given headings.
///
/// Returns `None` when there are no headings to link. The caller prepends
/// synthetic entries (like "Useful Links") before calling when those
/// sections are generated rather than authored.
///
/// # Example
///
/// ```rust
/// use bindery_content::markdown::render_toc;
///
/// let headings = vec!["Setup".to_string(), "What's next?".to_string()];
/// let toc = render_toc(&headings).unwrap();
/// assert!(toc.starts_with("## Table of Contents\n"));
/// assert!(toc.contains("- [Setup](#setup)"));
/// assert!(toc.contains("- [What's next?](#whats-next)"));
///
/// assert!(render_toc(&[]).is_none());
/// ```
pub fn render_toc(headings: &[String]) -> Option<String> {
    if headings.is_empty() {
        return None;
    }

    let mut lines = vec!["## Table of Contents\n".to_string()];
    for heading in headings {
        lines.push(format!("- [{heading}](#{})", heading_anchor(heading)));
    }

    Some(format!("{}\n", lines.join("\n")))
}

// ============================================================================
// Tests
// ============================================================================
