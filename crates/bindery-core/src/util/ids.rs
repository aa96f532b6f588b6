//! ID normalization and anchor utilities.
//!
//! Provides functions for normalizing string identifiers to consistent
//! kebab-case form and for computing the anchor slugs that published
//! pages use in table-of-contents links.

use std::path::Path;

/// Normalize an identifier to lowercase kebab-case.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Replaces underscores with hyphens
/// 4. Collapses multiple whitespace into single hyphens
///
/// # Examples
///
/// ```
/// use bindery_core::util::ids::normalize_id;
///
/// assert_eq!(normalize_id("Cleaning Tables"), "cleaning-tables");
/// assert_eq!(normalize_id("scanned_documents"), "scanned-documents");
/// assert_eq!(normalize_id("  Mixed   Case  "), "mixed-case");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
}

/// Compute an ID from a file path's stem.
///
/// Extracts the file stem (filename without extension) and normalizes it.
/// Returns `None` if the path has no file stem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use bindery_core::util::ids::id_from_path;
///
/// assert_eq!(
///     id_from_path(Path::new("notebooks/Extracting_Tables.ipynb")),
///     Some("extracting-tables".to_string())
/// );
/// assert_eq!(id_from_path(Path::new("/")), None);
/// ```
pub fn id_from_path(path: &Path) -> Option<String> {
    path.file_stem().and_then(|s| s.to_str()).map(normalize_id)
}

/// Compute the anchor slug for a markdown heading.
///
/// Matches the anchors the HTML renderer assigns to headings, so that
/// table-of-contents entries link correctly:
/// characters other than alphanumerics, underscores, hyphens, and spaces
/// are dropped, the remainder is trimmed and lowercased, and spaces become
/// hyphens.
///
/// # Examples
///
/// ```
/// use bindery_core::util::ids::heading_anchor;
///
/// assert_eq!(heading_anchor("Getting Started"), "getting-started");
/// assert_eq!(heading_anchor("What's next?"), "whats-next");
/// assert_eq!(heading_anchor("Step 3: Export"), "step-3-export");
/// ```
pub fn heading_anchor(heading: &str) -> String {
    heading
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || *c == ' ')
        .collect::<String>()
        .trim()
        .to_lowercase()
        .replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // normalize_id tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_normalize_id_simple() {
        assert_eq!(normalize_id("worksheet"), "worksheet");
    }

    #[test]
    fn test_normalize_id_with_spaces() {
        assert_eq!(normalize_id("Cleaning Tables"), "cleaning-tables");
    }

    #[test]
    fn test_normalize_id_with_underscores() {
        assert_eq!(normalize_id("scanned_documents"), "scanned-documents");
    }

    #[test]
    fn test_normalize_id_with_whitespace() {
        assert_eq!(normalize_id("  Mixed   Case  "), "mixed-case");
    }

    #[test]
    fn test_normalize_id_empty() {
        assert_eq!(normalize_id(""), "");
        assert_eq!(normalize_id("   "), "");
    }

    #[test]
    fn test_normalize_id_mixed_separators() {
        assert_eq!(normalize_id("foo_bar baz"), "foo-bar-baz");
    }

    // -------------------------------------------------------------------------
    // id_from_path tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_id_from_path_simple() {
        let path = Path::new("/workshop/notebooks/intro.ipynb");
        assert_eq!(id_from_path(path), Some("intro".to_string()));
    }

    #[test]
    fn test_id_from_path_with_underscores() {
        let path = Path::new("/workshop/Extracting_Tables.ipynb");
        assert_eq!(id_from_path(path), Some("extracting-tables".to_string()));
    }

    #[test]
    fn test_id_from_path_no_extension() {
        let path = Path::new("/workshop/README");
        assert_eq!(id_from_path(path), Some("readme".to_string()));
    }

    #[test]
    fn test_id_from_path_no_stem() {
        let path = Path::new("/");
        assert_eq!(id_from_path(path), None);
    }

    // -------------------------------------------------------------------------
    // heading_anchor tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_anchor_simple() {
        assert_eq!(heading_anchor("Getting Started"), "getting-started");
    }

    #[test]
    fn test_anchor_strips_punctuation() {
        assert_eq!(heading_anchor("What's next?"), "whats-next");
        assert_eq!(heading_anchor("Step 3: Export"), "step-3-export");
    }

    #[test]
    fn test_anchor_keeps_hyphens_and_underscores() {
        assert_eq!(heading_anchor("pre-built models"), "pre-built-models");
        assert_eq!(heading_anchor("snake_case heading"), "snake_case-heading");
    }

    #[test]
    fn test_anchor_unicode() {
        // Alphanumeric check is Unicode-aware
        assert_eq!(heading_anchor("Résumé parsing"), "résumé-parsing");
    }

    #[test]
    fn test_anchor_empty() {
        assert_eq!(heading_anchor(""), "");
        assert_eq!(heading_anchor("!!!"), "");
    }
}
