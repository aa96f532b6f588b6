//! Copying referenced local files into the output tree.
//!
//! The asset scanner in `bindery-content` finds what a page or notebook
//! cell links to; this module mirrors those files into the output
//! directory, preserving their relative paths so the links keep working.

use std::path::Path;

use bindery_content::assets::{AssetScope, referenced_assets};
use bindery_core::{Error, Result};

/// Copy every local asset referenced by `content` from `source_dir` into
/// `output_dir`.
///
/// Already-copied files are left alone (the first writer wins, matching
/// how shared images behave across items). Missing page assets get a
/// warning; notebook cells routinely reference files their own code
/// produces at run time, so those are skipped quietly.
///
/// Returns the references that were actually copied.
pub fn copy_referenced_assets(
    content: &str,
    scope: AssetScope,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<String>> {
    let mut copied = Vec::new();

    for reference in referenced_assets(content, scope) {
        let source = source_dir.join(&reference);
        if !source.is_file() {
            if scope == AssetScope::Page {
                log::warn!("referenced file not found: {reference}");
            }
            continue;
        }

        let dest = output_dir.join(&reference);
        if dest.exists() {
            continue;
        }
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
        }
        std::fs::copy(&source, &dest).map_err(|e| Error::io_with_path(e, &source))?;
        log::debug!("copied referenced file: {reference}");
        copied.push(reference);
    }

    Ok(copied)
}

// ============================================================================
// Tests
// ============================================================================
