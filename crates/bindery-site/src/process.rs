//! Per-item processing: one notebook or page in, published files out.

use std::path::Path;

use bindery_content::assets::AssetScope;
use bindery_content::{extract_frontmatter, render_page, render_toc, section_headings};
use bindery_core::{Error, Result};
use bindery_notebook::{
    SetupCellSpec, WorkshopMeta, clear_solutions, insert_setup_cell, normalize_kernelspec,
    prepend_cell, read_notebook, setup_cell, slide_link_cell, workshop_meta, write_notebook,
};

use crate::assets::copy_referenced_assets;
use crate::archive::bundle_data;
use crate::config::{SectionSpec, WorkshopConfig};
use crate::item::{ItemKind, ItemRecord};
use crate::slides::{copy_slide_deck, slide_embed_html, slide_thumbnail};

/// The outcome of processing one item.
#[derive(Debug)]
pub struct ProcessedItem {
    /// Record for the index.
    pub record: ItemRecord,
    /// How many referenced assets were copied for this item.
    pub assets_copied: usize,
}

/// Apply section-level slides to an item that has none of its own.
///
/// Returns whether the slides were inherited.
fn inherit_section_slides(meta: &mut WorkshopMeta, section: &SectionSpec) -> bool {
    if meta.slides.is_none() && section.slides.is_some() {
        meta.slides = section.slides.clone();
        return true;
    }
    false
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(String::from)
        .ok_or_else(|| Error::parse(format!("unusable file name: {}", path.display())))
}

/// Publish one notebook: the worksheet and answers variants, plus its
/// data bundle, slide deck, and referenced assets.
///
/// Returns `Ok(None)` when the notebook carries no workshop metadata (or
/// metadata that does not parse — that is logged and the item skipped, so
/// one broken notebook does not take down the whole build).
pub fn process_notebook(
    path: &Path,
    section: &SectionSpec,
    config: &WorkshopConfig,
    output_dir: &Path,
) -> Result<Option<ProcessedItem>> {
    let notebook = read_notebook(path)?;
    let mut meta = match workshop_meta(&notebook) {
        Ok(Some(meta)) => meta,
        Ok(None) => {
            log::info!("skipping {} - no workshop metadata", path.display());
            return Ok(None);
        }
        Err(e) => {
            log::warn!("skipping {}: {e}", path.display());
            return Ok(None);
        }
    };

    let slides_inherited = inherit_section_slides(&mut meta, section);
    let stem = file_stem(path)?;
    let item_dir = path.parent().unwrap_or(Path::new("."));

    // The answers variant is the notebook as authored; the worksheet has
    // solution cells cleared. Both get the published kernelspec.
    let mut answers = notebook.clone();
    normalize_kernelspec(&mut answers);
    let mut worksheet = clear_solutions(&answers);

    // Setup cell + data bundle
    let mut data_file = None;
    if !meta.data_files.is_empty() {
        let zip_name = format!("{stem}-data.zip");
        let install = meta
            .install
            .as_ref()
            .map(|i| i.packages())
            .unwrap_or_else(|| config.default_install());

        let setup = setup_cell(&SetupCellSpec {
            zip_name: &zip_name,
            github_repo: &config.github_repo,
            github_branch: &config.github_branch,
            site_dir: &config.output_dir,
            install: &install,
            links: &meta.links,
        });
        insert_setup_cell(&mut answers, setup.clone());
        insert_setup_cell(&mut worksheet, setup);

        bundle_data(&meta.data_files, &output_dir.join(&zip_name), item_dir)?;
        data_file = Some(zip_name);
    }

    // Assets referenced from markdown cells
    let mut assets_copied = 0;
    for cell in notebook.cells.iter().filter(|c| c.is_markdown()) {
        assets_copied += copy_referenced_assets(
            &cell.source_text(),
            AssetScope::NotebookCell,
            item_dir,
            output_dir,
        )?
        .len();
    }

    // Slide deck: link cell on top of both variants, deck copied alongside
    if let Some(slide_file) = &meta.slides {
        prepend_cell(&mut answers, slide_link_cell(slide_file));
        prepend_cell(&mut worksheet, slide_link_cell(slide_file));
        copy_slide_deck(slide_file, item_dir, output_dir)?;
    }

    // Worksheet keeps the original name; answers get the -ANSWERS suffix
    let worksheet_file = format!("{stem}.ipynb");
    let answers_file = format!("{stem}-ANSWERS.ipynb");
    write_notebook(&worksheet, &output_dir.join(&worksheet_file))?;
    write_notebook(&answers, &output_dir.join(&answers_file))?;
    log::info!("published {worksheet_file} and {answers_file}");

    let record = ItemRecord {
        title: meta.title.clone().unwrap_or_else(|| stem.clone()),
        description: meta.description.clone().unwrap_or_default(),
        name: stem,
        section: section.title.clone(),
        kind: ItemKind::Notebook,
        worksheet_file: Some(worksheet_file),
        answers_file: Some(answers_file),
        html_file: None,
        data_file,
        order: meta.order,
        links: meta.links,
        slides: meta.slides,
        slides_inherited,
    };

    Ok(Some(ProcessedItem {
        record,
        assets_copied,
    }))
}

/// Publish one markdown page as a standalone HTML file.
///
/// The published body is assembled in front of the authored content:
/// title heading, table of contents, data download box, slide embed, and
/// the item's links. Pages without frontmatter are skipped.
pub fn process_page(
    path: &Path,
    section: &SectionSpec,
    config: &WorkshopConfig,
    output_dir: &Path,
) -> Result<Option<ProcessedItem>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    let frontmatter = extract_frontmatter(&content)?;
    let mut meta: WorkshopMeta = match frontmatter.deserialize() {
        Ok(Some(meta)) => meta,
        Ok(None) => {
            log::info!("skipping {} - no frontmatter", path.display());
            return Ok(None);
        }
        Err(e) => {
            log::warn!("skipping {}: {e}", path.display());
            return Ok(None);
        }
    };
    let body = frontmatter.body();

    let slides_inherited = inherit_section_slides(&mut meta, section);
    let stem = file_stem(path)?;
    let item_dir = path.parent().unwrap_or(Path::new("."));
    let title = meta.title.clone().unwrap_or_else(|| stem.clone());

    let assets_copied =
        copy_referenced_assets(body, AssetScope::Page, item_dir, output_dir)?.len();

    let mut data_file = None;
    if !meta.data_files.is_empty() {
        let zip_name = format!("{stem}-data.zip");
        bundle_data(&meta.data_files, &output_dir.join(&zip_name), item_dir)?;
        data_file = Some(zip_name);
    }

    let mut page = format!("# {title}\n\n");

    // Table of contents, with the generated links section included
    let mut toc_entries = section_headings(body);
    if !meta.links.is_empty() {
        toc_entries.insert(0, "Useful Links".to_string());
    }
    if let Some(toc) = render_toc(&toc_entries) {
        page.push_str(&toc);
        page.push('\n');
    }

    if let Some(zip_name) = &data_file {
        page.push_str(&format!(
            "<div class=\"download-box\">\n<strong>Download files:</strong> \
             <a href=\"./{zip_name}\">{zip_name}</a>\n</div>\n\n"
        ));
    }

    if let Some(slide_file) = &meta.slides {
        let deck = copy_slide_deck(slide_file, item_dir, output_dir)?;
        let thumbnail = slide_thumbnail(&deck, output_dir);
        page.push_str(&slide_embed_html(slide_file, thumbnail.as_deref()));
        page.push_str("\n\n");
    }

    if !meta.links.is_empty() {
        page.push_str("## Useful Links\n\n");
        for link in &meta.links {
            if link.description.is_empty() {
                page.push_str(&format!("- [{}]({})\n", link.name, link.url));
            } else {
                page.push_str(&format!("- [{}]({}) - {}\n", link.name, link.url, link.description));
            }
        }
        page.push('\n');
    }

    page.push_str(body);

    let html_file = format!("{stem}.html");
    let html = render_page(&title, &page);
    std::fs::write(output_dir.join(&html_file), html)
        .map_err(|e| Error::io_with_path(e, output_dir.join(&html_file)))?;
    log::info!("published {html_file}");

    let record = ItemRecord {
        name: stem,
        title,
        description: meta.description.clone().unwrap_or_default(),
        section: section.title.clone(),
        kind: ItemKind::Page,
        worksheet_file: None,
        answers_file: None,
        html_file: Some(html_file),
        data_file,
        order: meta.order,
        links: meta.links,
        slides: meta.slides,
        slides_inherited,
    };

    Ok(Some(ProcessedItem {
        record,
        assets_copied,
    }))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn section(title: &str) -> SectionSpec {
        SectionSpec {
            folder: "01-intro".to_string(),
            title: title.to_string(),
            slides: None,
        }
    }

    fn config() -> WorkshopConfig {
        WorkshopConfig {
            github_repo: "example/workshop".to_string(),
            ..WorkshopConfig::default()
        }
    }

    fn write_fixture_notebook(dir: &Path, name: &str, workshop: serde_json::Value) {
        let notebook = json!({
            "cells": [
                {"cell_type": "markdown", "metadata": {}, "source": ["# Exercise\n"]},
                {"cell_type": "code", "metadata": {}, "source": ["import pandas as pd\n"],
                 "execution_count": null, "outputs": []},
                {"cell_type": "code", "metadata": {"tags": ["solution"]},
                 "source": ["df = pd.read_csv('data/sample.csv')\n"],
                 "execution_count": null, "outputs": []}
            ],
            "metadata": {"workshop": workshop},
            "nbformat": 4,
            "nbformat_minor": 5
        });
        fs::write(dir.join(name), serde_json::to_string(&notebook).unwrap()).unwrap();
    }

    // ------------------------------------------------------------------------
    // process_notebook tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_notebook_variants_written() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_fixture_notebook(src.path(), "intro.ipynb", json!({"title": "Intro"}));

        let processed = process_notebook(
            &src.path().join("intro.ipynb"),
            &section("Day One"),
            &config(),
            out.path(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(processed.record.title, "Intro");
        assert!(out.path().join("intro.ipynb").is_file());
        assert!(out.path().join("intro-ANSWERS.ipynb").is_file());

        // Worksheet has the solution cleared, answers keep it
        let worksheet = read_notebook(&out.path().join("intro.ipynb")).unwrap();
        let answers = read_notebook(&out.path().join("intro-ANSWERS.ipynb")).unwrap();
        assert!(worksheet.cells[2].source.is_empty());
        assert!(answers.cells[2].source_text().contains("read_csv"));
    }

    #[test]
    fn test_notebook_without_metadata_skipped() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let notebook = json!({"cells": [], "metadata": {}, "nbformat": 4, "nbformat_minor": 5});
        fs::write(
            src.path().join("scratch.ipynb"),
            serde_json::to_string(&notebook).unwrap(),
        )
        .unwrap();

        let processed = process_notebook(
            &src.path().join("scratch.ipynb"),
            &section("Day One"),
            &config(),
            out.path(),
        )
        .unwrap();

        assert!(processed.is_none());
        assert!(!out.path().join("scratch.ipynb").exists());
    }

    #[test]
    fn test_notebook_data_bundle_and_setup_cell() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::create_dir_all(src.path().join("data")).unwrap();
        fs::write(src.path().join("data/sample.csv"), "a,b\n").unwrap();
        write_fixture_notebook(
            src.path(),
            "tables.ipynb",
            json!({"title": "Tables", "data_files": ["data/*.csv"], "install": "pandas"}),
        );

        let processed = process_notebook(
            &src.path().join("tables.ipynb"),
            &section("Day One"),
            &config(),
            out.path(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(processed.record.data_file.as_deref(), Some("tables-data.zip"));
        assert!(out.path().join("tables-data.zip").is_file());

        // Setup cell lands right after the leading markdown cell
        let worksheet = read_notebook(&out.path().join("tables.ipynb")).unwrap();
        assert!(worksheet.cells[0].is_markdown());
        let setup_source = worksheet.cells[1].source_text();
        assert!(setup_source.contains("!pip install --upgrade --quiet pandas"));
        assert!(setup_source.contains("example/workshop/raw/main/docs/tables-data.zip"));
    }

    #[test]
    fn test_notebook_kernelspec_normalized() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_fixture_notebook(src.path(), "intro.ipynb", json!({"title": "Intro"}));

        process_notebook(
            &src.path().join("intro.ipynb"),
            &section("Day One"),
            &config(),
            out.path(),
        )
        .unwrap();

        let worksheet = read_notebook(&out.path().join("intro.ipynb")).unwrap();
        assert_eq!(worksheet.metadata["kernelspec"]["name"], "python3");
    }

    #[test]
    fn test_notebook_missing_slides_fail_build() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_fixture_notebook(
            src.path(),
            "intro.ipynb",
            json!({"title": "Intro", "slides": "missing.pdf"}),
        );

        let result = process_notebook(
            &src.path().join("intro.ipynb"),
            &section("Day One"),
            &config(),
            out.path(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_notebook_inherits_section_slides() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(src.path().join("deck.pdf"), b"%PDF").unwrap();
        write_fixture_notebook(src.path(), "intro.ipynb", json!({"title": "Intro"}));

        let mut sec = section("Day One");
        sec.slides = Some("deck.pdf".to_string());

        let processed = process_notebook(
            &src.path().join("intro.ipynb"),
            &sec,
            &config(),
            out.path(),
        )
        .unwrap()
        .unwrap();

        assert!(processed.record.slides_inherited);
        assert!(processed.record.own_slides().is_none());
        assert!(out.path().join("deck.pdf").is_file());

        // Slide link cell sits on top of the published variants
        let worksheet = read_notebook(&out.path().join("intro.ipynb")).unwrap();
        assert!(worksheet.cells[0].source_text().starts_with("**Slides:**"));
    }

    // ------------------------------------------------------------------------
    // process_page tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_page_rendered_with_toc() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(
            src.path().join("setup.md"),
            "---\ntitle: Setup Guide\n---\n\n## Install\n\nSteps.\n\n## Verify\n\nMore.\n",
        )
        .unwrap();

        let processed = process_page(
            &src.path().join("setup.md"),
            &section("Day One"),
            &config(),
            out.path(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(processed.record.html_file.as_deref(), Some("setup.html"));
        let html = fs::read_to_string(out.path().join("setup.html")).unwrap();
        assert!(html.contains("<title>Setup Guide</title>"));
        assert!(html.contains("Table of Contents"));
        assert!(html.contains(r##"href="#install""##));
        assert!(html.contains(r#"<h2 id="verify">"#));
    }

    #[test]
    fn test_page_without_frontmatter_skipped() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(src.path().join("notes.md"), "# Just notes\n").unwrap();

        let processed = process_page(
            &src.path().join("notes.md"),
            &section("Day One"),
            &config(),
            out.path(),
        )
        .unwrap();

        assert!(processed.is_none());
    }

    #[test]
    fn test_page_links_section_and_toc_entry() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(
            src.path().join("refs.md"),
            "---\ntitle: References\nlinks:\n  - name: Docs\n    url: https://docs.example\n    description: API reference\n---\n\n## Reading\n\nList.\n",
        )
        .unwrap();

        process_page(
            &src.path().join("refs.md"),
            &section("Day One"),
            &config(),
            out.path(),
        )
        .unwrap()
        .unwrap();

        let html = fs::read_to_string(out.path().join("refs.html")).unwrap();
        assert!(html.contains(r##"href="#useful-links""##));
        assert!(html.contains(r#"<h2 id="useful-links">"#));
        assert!(html.contains(r#"<a href="https://docs.example">Docs</a>"#));
        assert!(html.contains("API reference"));
    }

    #[test]
    fn test_page_data_bundle_and_download_box() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::create_dir_all(src.path().join("data")).unwrap();
        fs::write(src.path().join("data/rows.csv"), "x\n").unwrap();
        fs::write(
            src.path().join("handout.md"),
            "---\ntitle: Handout\ndata_files:\n  - data/*.csv\n---\n\nGrab the data.\n",
        )
        .unwrap();

        let processed = process_page(
            &src.path().join("handout.md"),
            &section("Day One"),
            &config(),
            out.path(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(processed.record.data_file.as_deref(), Some("handout-data.zip"));
        assert!(out.path().join("handout-data.zip").is_file());
        let html = fs::read_to_string(out.path().join("handout.html")).unwrap();
        assert!(html.contains("download-box"));
        assert!(html.contains("handout-data.zip"));
    }

    #[test]
    fn test_page_copies_referenced_image() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(src.path().join("flow.png"), b"png").unwrap();
        fs::write(
            src.path().join("viz.md"),
            "---\ntitle: Viz\n---\n\n![flow](flow.png)\n",
        )
        .unwrap();

        let processed = process_page(
            &src.path().join("viz.md"),
            &section("Day One"),
            &config(),
            out.path(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(processed.assets_copied, 1);
        assert!(out.path().join("flow.png").is_file());
    }

    #[test]
    fn test_page_title_falls_back_to_stem() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(src.path().join("untitled.md"), "---\norder: 1\n---\n\nBody.\n").unwrap();

        let processed = process_page(
            &src.path().join("untitled.md"),
            &section("Day One"),
            &config(),
            out.path(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(processed.record.title, "untitled");
    }
}
