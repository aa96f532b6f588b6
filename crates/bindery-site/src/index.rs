//! Index page rendering.
//!
//! The index groups published items by section and renders one markdown
//! document, which the pipeline then wraps in the page template. Sections
//! appear in configured order; items with an explicit `order` come first
//! (ascending), the rest follow by name descending so date-stamped
//! notebooks surface newest first.

use std::path::Path;

use bindery_core::Result;

use crate::config::WorkshopConfig;
use crate::item::{ItemKind, ItemRecord};
use crate::slides::{copy_slide_deck, slide_embed_html, slide_thumbnail};

const DEFAULT_INDEX_TEMPLATE: &str = "# {{ title }}\n\n{{ description }}\n\n{{ notebooks }}\n";

/// Render the index page markdown for the published items.
///
/// Section-level slide decks are copied and thumbnailed into
/// `output_dir` as a side effect, since their embeds only exist on the
/// index.
pub fn render_index(
    items: &[ItemRecord],
    config: &WorkshopConfig,
    project_root: &Path,
    output_dir: &Path,
) -> Result<String> {
    let sections = config.resolved_sections();

    // Group items by section title, preserving first-seen order
    let mut grouped: Vec<(String, Vec<&ItemRecord>)> = Vec::new();
    for item in items {
        match grouped.iter_mut().find(|(title, _)| *title == item.section) {
            Some((_, bucket)) => bucket.push(item),
            None => grouped.push((item.section.clone(), vec![item])),
        }
    }

    // Configured sections first, then any stragglers in sorted order
    let mut ordered: Vec<String> = Vec::new();
    for spec in &sections {
        if grouped.iter().any(|(title, _)| *title == spec.title) && !ordered.contains(&spec.title)
        {
            ordered.push(spec.title.clone());
        }
    }
    let mut leftovers: Vec<String> = grouped
        .iter()
        .map(|(title, _)| title.clone())
        .filter(|title| !ordered.contains(title))
        .collect();
    leftovers.sort();
    ordered.extend(leftovers);

    let mut out = String::new();
    for section_title in &ordered {
        let bucket = grouped
            .iter()
            .find(|(title, _)| title == section_title)
            .map(|(_, bucket)| bucket.as_slice())
            .unwrap_or(&[]);

        out.push_str(&format!("\n## {section_title}\n"));

        // Section-wide slide deck embeds under the section heading
        if let Some(spec) = sections.iter().find(|s| s.title == *section_title) {
            if let Some(slide_file) = &spec.slides {
                let section_dir = project_root.join(&spec.folder);
                let deck = copy_slide_deck(slide_file, &section_dir, output_dir)?;
                let thumbnail = slide_thumbnail(&deck, output_dir);
                out.push('\n');
                out.push_str(&slide_embed_html(slide_file, thumbnail.as_deref()));
                out.push('\n');
            }
        }

        for item in sort_section_items(bucket) {
            render_item(&mut out, item, config);
        }
    }

    let template = config
        .index_template
        .as_deref()
        .unwrap_or(DEFAULT_INDEX_TEMPLATE);
    Ok(template
        .replace("{{ title }}", &config.title)
        .replace("{{ description }}", &config.description)
        .replace("{{ notebooks }}", &out)
        .replace("{{ author }}", &config.author)
        .replace("{{ organization }}", &config.organization))
}

/// Items with an explicit order first (ascending), the rest by name
/// descending.
fn sort_section_items<'a>(items: &[&'a ItemRecord]) -> Vec<&'a ItemRecord> {
    let mut with_order: Vec<&ItemRecord> = items
        .iter()
        .copied()
        .filter(|i| i.order.is_some())
        .collect();
    with_order.sort_by_key(|i| i.order);

    let mut by_name: Vec<&ItemRecord> = items
        .iter()
        .copied()
        .filter(|i| i.order.is_none())
        .collect();
    by_name.sort_by(|a, b| b.name.cmp(&a.name));

    with_order.extend(by_name);
    with_order
}

fn colab_url(config: &WorkshopConfig, file: &str) -> String {
    format!(
        "https://colab.research.google.com/github/{}/blob/{}/{}/{file}",
        config.github_repo, config.github_branch, config.output_dir
    )
}

fn render_item(out: &mut String, item: &ItemRecord, config: &WorkshopConfig) {
    match item.kind {
        ItemKind::Notebook => render_notebook_item(out, item, config),
        ItemKind::Page => render_page_item(out, item),
    }

    if let Some(slides) = item.own_slides() {
        let file_name = Path::new(slides)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| slides.to_string());
        out.push_str(&format!(
            "<div style=\"margin: 0.5em 0; color: #666;\">Slides: \
             <a href=\"./{slides}\">{file_name}</a></div>\n"
        ));
    }

    if !item.links.is_empty() {
        out.push_str("\n**Links:**\n\n<ul>\n");
        for link in &item.links {
            if link.description.is_empty() {
                out.push_str(&format!("<li><a href=\"{}\">{}</a></li>\n", link.url, link.name));
            } else {
                out.push_str(&format!(
                    "<li><a href=\"{}\">{}</a> {}</li>\n",
                    link.url, link.name, link.description
                ));
            }
        }
        out.push_str("</ul>\n");
    }

    out.push('\n');
}

fn render_notebook_item(out: &mut String, item: &ItemRecord, config: &WorkshopConfig) {
    let worksheet = item.worksheet_file.as_deref().unwrap_or_default();
    let answers = item.answers_file.as_deref().unwrap_or_default();
    let worksheet_colab = colab_url(config, worksheet);
    let answers_colab = colab_url(config, answers);

    out.push_str(&format!("### [{}]({worksheet_colab})\n", item.title));
    if !item.description.is_empty() {
        out.push_str(&format!("{}\n", item.description));
    }

    out.push_str("<div class=\"resource-buttons\">\n");
    out.push_str(&format!(
        "<a href=\"{worksheet_colab}\" class=\"resource-button primary\">Live coding worksheet</a>\n"
    ));
    out.push_str(&format!(
        "<a href=\"{answers_colab}\" class=\"resource-button completed\">Completed version</a>\n"
    ));
    out.push_str("</div>\n");

    out.push_str("<div class=\"download-links\">\n");
    out.push_str(&format!(
        "Download: <a href=\"./{worksheet}\">worksheet</a> | <a href=\"./{answers}\">completed</a><br>\n"
    ));
    if let Some(data) = &item.data_file {
        out.push_str(&format!("Data: <a href=\"./{data}\">{data}</a>\n"));
    }
    out.push_str("</div>\n");
}

fn render_page_item(out: &mut String, item: &ItemRecord) {
    let html_file = item.html_file.as_deref().unwrap_or_default();
    out.push_str(&format!("### [{}](./{html_file})\n", item.title));
    if !item.description.is_empty() {
        out.push_str(&format!("{}\n", item.description));
    }
    if let Some(data) = &item.data_file {
        out.push_str("<div>\n");
        out.push_str(&format!("Data: <a href=\"./{data}\">{data}</a><br>\n"));
        out.push_str("</div>\n");
    }
}

// ============================================================================
// Tests
// ============================================================================
