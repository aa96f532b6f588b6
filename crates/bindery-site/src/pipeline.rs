//! The full publish run.
//!
//! Walks the configured sections, processes every notebook and page, and
//! renders the index. The output directory is rebuilt from scratch on
//! every run so removed items do not linger in the published site.

use std::path::{Path, PathBuf};

use bindery_content::render_page;
use bindery_core::{Error, Result};

use crate::config::WorkshopConfig;
use crate::index::render_index;
use crate::item::{ItemKind, ItemRecord};
use crate::process::{process_notebook, process_page};

/// Counters for the CLI summary line.
#[derive(Debug, Clone, Default)]
pub struct PublishStats {
    /// Total items published.
    pub items: usize,
    /// Notebooks among them.
    pub notebooks: usize,
    /// Pages among them.
    pub pages: usize,
    /// Data bundles written.
    pub bundles: usize,
    /// Referenced assets copied.
    pub assets_copied: usize,
}

/// Publish the workshop rooted at `project_root`.
pub fn publish(config: &WorkshopConfig, project_root: &Path) -> Result<PublishStats> {
    let output_dir = project_root.join(&config.output_dir);

    if output_dir.exists() {
        std::fs::remove_dir_all(&output_dir).map_err(|e| Error::io_with_path(e, &output_dir))?;
        log::info!("removed previous {}", output_dir.display());
    }
    std::fs::create_dir_all(&output_dir).map_err(|e| Error::io_with_path(e, &output_dir))?;

    let mut stats = PublishStats::default();

    let sections = config.resolved_sections();
    if sections.is_empty() {
        log::warn!("no sections configured; nothing to publish");
        return Ok(stats);
    }

    let mut records: Vec<ItemRecord> = Vec::new();

    for section in &sections {
        let folder = project_root.join(&section.folder);
        if !folder.is_dir() {
            log::warn!("section folder '{}' not found", section.folder);
            continue;
        }

        for path in list_sources(&folder, "ipynb")? {
            if is_checkpoint(&path) {
                continue;
            }
            log::info!("processing {}", path.display());
            if let Some(processed) = process_notebook(&path, section, config, &output_dir)? {
                stats.assets_copied += processed.assets_copied;
                records.push(processed.record);
            }
        }

        for path in list_sources(&folder, "md")? {
            log::info!("processing {}", path.display());
            if let Some(processed) = process_page(&path, section, config, &output_dir)? {
                stats.assets_copied += processed.assets_copied;
                records.push(processed.record);
            }
        }
    }

    stats.items = records.len();
    stats.notebooks = records
        .iter()
        .filter(|r| r.kind == ItemKind::Notebook)
        .count();
    stats.pages = records.iter().filter(|r| r.kind == ItemKind::Page).count();
    stats.bundles = records.iter().filter(|r| r.data_file.is_some()).count();

    if !records.is_empty() {
        let index_md = render_index(&records, config, project_root, &output_dir)?;
        let index_path = output_dir.join("index.html");
        std::fs::write(&index_path, render_page(&config.title, &index_md))
            .map_err(|e| Error::io_with_path(e, &index_path))?;
        log::info!("created {}", index_path.display());
    }

    log::info!(
        "published {} items to {}",
        stats.items,
        output_dir.display()
    );
    Ok(stats)
}

/// Source files with the given extension in one folder, name-sorted for
/// deterministic builds.
fn list_sources(folder: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(folder).map_err(|e| Error::io_with_path(e, folder))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .collect();

    paths.sort();
    Ok(paths)
}

fn is_checkpoint(path: &Path) -> bool {
    path.components()
        .any(|c| c.as_os_str() == ".ipynb_checkpoints")
}

// ============================================================================
// Tests
// ============================================================================
