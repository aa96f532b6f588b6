//! Data bundle creation.
//!
//! Items can declare `data_files` glob patterns; everything they match is
//! packed into a `<item>-data.zip` next to the published notebook or page.
//! Entry names are relative to the item's folder, so the bundle unpacks
//! into the same layout the notebook expects.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use bindery_core::{Error, Result};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Create a data bundle from glob patterns resolved against `base_dir`.
///
/// Patterns that match nothing log a warning but do not fail the build;
/// an authored pattern often goes stale before the data does. Matches are
/// deduplicated across patterns. Returns the number of files written.
pub fn bundle_data(patterns: &[String], zip_path: &Path, base_dir: &Path) -> Result<usize> {
    let file = File::create(zip_path).map_err(|e| Error::io_with_path(e, zip_path))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut added: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let full_pattern = base_dir.join(pattern);
        let matches = glob::glob(&full_pattern.to_string_lossy())
            .map_err(|e| Error::archive(format!("bad data pattern '{pattern}': {e}")))?;

        let mut matched_any = false;
        for entry in matches {
            let path =
                entry.map_err(|e| Error::archive(format!("unreadable match for '{pattern}': {e}")))?;
            if path.is_dir() {
                continue;
            }
            matched_any = true;
            if added.contains(&path) {
                continue;
            }

            // Entries outside the item folder keep their full path
            let arcname = path
                .strip_prefix(base_dir)
                .unwrap_or(&path)
                .to_string_lossy()
                .into_owned();

            let bytes = std::fs::read(&path).map_err(|e| Error::io_with_path(e, &path))?;
            writer
                .start_file(arcname, options.clone())
                .map_err(|e| Error::archive(e.to_string()))?;
            writer
                .write_all(&bytes)
                .map_err(|e| Error::io_with_path(e, zip_path))?;

            added.push(path);
        }

        if !matched_any {
            log::warn!(
                "no files match data pattern '{pattern}' in {}",
                base_dir.display()
            );
        }
    }

    writer.finish().map_err(|e| Error::archive(e.to_string()))?;
    log::info!("created {} with {} files", zip_path.display(), added.len());
    Ok(added.len())
}

// ============================================================================
// Tests
// ============================================================================
