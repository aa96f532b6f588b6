//! Local asset reference scanning.
//!
//! Authored markdown (pages and notebook cells) links to files that must
//! ship with the published output: PDFs, images, and for pages also video
//! files. This module finds those references so the pipeline can copy them
//! into the output tree.
//!
//! Remote (`http://`/`https://`) targets are left alone.
//!
//! # Example
//!
//! ```rust
//! use bindery_content::assets::{AssetScope, referenced_assets};
//!
//! let content = "See [the report](report.pdf) and ![chart](img/chart.png).";
//! let found = referenced_assets(content, AssetScope::Page);
//! assert_eq!(found, vec!["report.pdf", "img/chart.png"]);
//! ```

use regex::Regex;

/// Which reference patterns apply to a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetScope {
    /// A standalone markdown page: links, images, and embedded video.
    Page,
    /// A notebook markdown cell: links and images only.
    NotebookCell,
}

/// Link targets matched in markdown link syntax, per scope.
const PAGE_LINK_EXTS: &str = "pdf|png|jpg|jpeg|gif|svg|mp4|webm|mov";
const CELL_LINK_EXTS: &str = "pdf|png|jpg|jpeg|gif|svg";
const IMAGE_EXTS: &str = "png|jpg|jpeg|gif|svg";
const VIDEO_EXTS: &str = "mp4|webm|mov";

fn reference_patterns(scope: AssetScope) -> Vec<Regex> {
    let link_exts = match scope {
        AssetScope::Page => PAGE_LINK_EXTS,
        AssetScope::NotebookCell => CELL_LINK_EXTS,
    };

    let mut patterns = vec![
        // Markdown links: [text](file.pdf)
        format!(r#"(?i)\[[^\]]*\]\(([^)]+\.(?:{link_exts}))\)"#),
        // HTML image tags: <img src="file.png">
        format!(r#"(?i)<img[^>]*?src=["']([^"']+\.(?:{IMAGE_EXTS}))["']"#),
        // Markdown images: ![alt](file.png)
        format!(r#"(?i)!\[[^\]]*\]\(([^)]+\.(?:{IMAGE_EXTS}))\)"#),
    ];

    if scope == AssetScope::Page {
        patterns.push(format!(
            r#"(?i)<source[^>]*?src=["']([^"']+\.(?:{VIDEO_EXTS}))["']"#
        ));
        patterns.push(format!(
            r#"(?i)<video[^>]*?src=["']([^"']+\.(?:{VIDEO_EXTS}))["']"#
        ));
    }

    patterns
        .iter()
        .map(|p| Regex::new(p).expect("asset reference pattern is valid"))
        .collect()
}

/// Find local file references in markdown content.
///
/// Returns relative paths in first-seen order, deduplicated. URLs are
/// skipped.
pub fn referenced_assets(content: &str, scope: AssetScope) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for pattern in reference_patterns(scope) {
        for caps in pattern.captures_iter(content) {
            let target = match caps.get(1) {
                Some(m) => m.as_str(),
                None => continue,
            };
            if target.starts_with("http://") || target.starts_with("https://") {
                continue;
            }
            if !found.iter().any(|f| f == target) {
                found.push(target.to_string());
            }
        }
    }

    found
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Page scope
    // ------------------------------------------------------------------------

    #[test]
    fn test_markdown_link_to_pdf() {
        let found = referenced_assets("Read [the slides](decks/intro.pdf).", AssetScope::Page);
        assert_eq!(found, vec!["decks/intro.pdf"]);
    }

    #[test]
    fn test_markdown_image() {
        let found = referenced_assets("![diagram](img/flow.png)", AssetScope::Page);
        assert_eq!(found, vec!["img/flow.png"]);
    }

    #[test]
    fn test_html_img_tag() {
        let found = referenced_assets(
            r#"<img style="width: 50%" src="shots/before.jpg">"#,
            AssetScope::Page,
        );
        assert_eq!(found, vec!["shots/before.jpg"]);
    }

    #[test]
    fn test_html_video_sources() {
        let content = r#"<video controls><source src="demo.mp4" type="video/mp4"></video>"#;
        let found = referenced_assets(content, AssetScope::Page);
        assert_eq!(found, vec!["demo.mp4"]);
    }

    #[test]
    fn test_video_link_on_page() {
        let found = referenced_assets("[watch](clips/run.mov)", AssetScope::Page);
        assert_eq!(found, vec!["clips/run.mov"]);
    }

    #[test]
    fn test_urls_are_skipped() {
        let content = "[remote](https://example.com/file.pdf) ![x](http://example.com/a.png)";
        assert!(referenced_assets(content, AssetScope::Page).is_empty());
    }

    #[test]
    fn test_duplicates_reported_once() {
        let content = "![a](chart.png) and again ![b](chart.png)";
        let found = referenced_assets(content, AssetScope::Page);
        assert_eq!(found, vec!["chart.png"]);
    }

    #[test]
    fn test_extension_case_insensitive() {
        let found = referenced_assets("[scan](doc/Report.PDF)", AssetScope::Page);
        assert_eq!(found, vec!["doc/Report.PDF"]);
    }

    #[test]
    fn test_non_asset_links_ignored() {
        let content = "[page](other.md) [archive](data.zip)";
        assert!(referenced_assets(content, AssetScope::Page).is_empty());
    }

    // ------------------------------------------------------------------------
    // Notebook cell scope
    // ------------------------------------------------------------------------

    #[test]
    fn test_cell_scope_matches_pdf_and_images() {
        let content = "[slides](deck.pdf) ![fig](fig.svg)";
        let found = referenced_assets(content, AssetScope::NotebookCell);
        assert_eq!(found, vec!["deck.pdf", "fig.svg"]);
    }

    #[test]
    fn test_cell_scope_ignores_video() {
        let content = r#"[clip](demo.mp4) <source src="demo.webm">"#;
        assert!(referenced_assets(content, AssetScope::NotebookCell).is_empty());
    }

    #[test]
    fn test_empty_content() {
        assert!(referenced_assets("", AssetScope::Page).is_empty());
    }
}
