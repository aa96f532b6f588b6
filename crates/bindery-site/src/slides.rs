//! Slide deck handling: copying, thumbnails, and embed markup.
//!
//! Decks are opaque PDF files. The pipeline copies them into the output
//! tree, renders a first-page thumbnail with whichever external tool is
//! installed (ImageMagick `convert`, then poppler's `pdftoppm`), and
//! emits a click-to-load embed block so the index and pages do not pull
//! in megabytes of PDF up front.

use std::path::{Path, PathBuf};
use std::process::Command;

use bindery_core::{Error, Result};

/// Width of generated thumbnails, in pixels.
const THUMBNAIL_WIDTH: u32 = 800;

/// Resolve a configured slide path: first against the item's folder, then
/// against the project root.
///
/// A deck that resolves nowhere is an authoring error and fails the build.
pub fn resolve_slide_deck(slide_file: &str, item_dir: &Path) -> Result<PathBuf> {
    let beside_item = item_dir.join(slide_file);
    if beside_item.is_file() {
        return Ok(beside_item);
    }
    let from_root = PathBuf::from(slide_file);
    if from_root.is_file() {
        return Ok(from_root);
    }
    log::error!(
        "slide file not found: {slide_file} (looked in {} and the project root)",
        item_dir.display()
    );
    Err(Error::asset(beside_item))
}

/// Copy a slide deck into the output tree, preserving its relative path.
///
/// Returns the resolved source path for thumbnail generation.
pub fn copy_slide_deck(slide_file: &str, item_dir: &Path, output_dir: &Path) -> Result<PathBuf> {
    let source = resolve_slide_deck(slide_file, item_dir)?;

    let dest = output_dir.join(slide_file);
    if !dest.exists() {
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
        }
        std::fs::copy(&source, &dest).map_err(|e| Error::io_with_path(e, &source))?;
        log::info!("copied slide deck: {slide_file}");
    }

    Ok(source)
}

/// Render a first-page thumbnail for a deck into the output directory.
///
/// Returns the thumbnail file name, or `None` when no renderer is
/// available — the embed then falls back to a plain placeholder, which
/// is a softer failure than blocking the whole build on a local tool.
pub fn slide_thumbnail(pdf_path: &Path, output_dir: &Path) -> Option<String> {
    let stem = pdf_path.file_stem()?.to_str()?;
    let thumb_name = format!("{stem}-thumb.png");
    let thumb_path = output_dir.join(&thumb_name);

    if thumb_path.exists() {
        return Some(thumb_name);
    }

    if imagemagick_thumbnail(pdf_path, &thumb_path)
        || pdftoppm_thumbnail(pdf_path, output_dir, stem, &thumb_path)
    {
        log::info!("created slide thumbnail: {thumb_name}");
        return Some(thumb_name);
    }

    log::warn!(
        "could not create thumbnail for {} (install ImageMagick or poppler-utils)",
        pdf_path.display()
    );
    None
}

fn imagemagick_thumbnail(pdf_path: &Path, thumb_path: &Path) -> bool {
    let first_page = format!("{}[0]", pdf_path.display());
    let resize = format!("{THUMBNAIL_WIDTH}x");
    let status = Command::new("convert")
        .args(["-density", "150"])
        .arg(&first_page)
        .args(["-resize", &resize, "-quality", "85"])
        .arg(thumb_path)
        .output();

    matches!(status, Ok(out) if out.status.success()) && thumb_path.exists()
}

fn pdftoppm_thumbnail(pdf_path: &Path, output_dir: &Path, stem: &str, thumb_path: &Path) -> bool {
    let prefix = output_dir.join(stem);
    let status = Command::new("pdftoppm")
        .args(["-f", "1", "-l", "1", "-png", "-r", "150", "-singlefile"])
        .arg(pdf_path)
        .arg(&prefix)
        .output();

    if !matches!(status, Ok(out) if out.status.success()) {
        return false;
    }

    // pdftoppm writes <prefix>.png
    let produced = output_dir.join(format!("{stem}.png"));
    produced.is_file() && std::fs::rename(&produced, thumb_path).is_ok()
}

/// Render the click-to-load embed block for a deck.
///
/// The preview (thumbnail or placeholder) swaps for an inline `<embed>`
/// when clicked, so the PDF is only fetched on demand.
pub fn slide_embed_html(slide_file: &str, thumbnail: Option<&str>) -> String {
    let stem = Path::new(slide_file)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| slide_file.to_string());
    let slide_id = format!("slides-{stem}").replace([' ', '.'], "-");

    let preview = match thumbnail {
        Some(thumb) => format!(
            r#"<img src="./{thumb}" alt="First slide" style="max-width: 100%; cursor: pointer;">"#
        ),
        None => concat!(
            r#"<div style="background: #f0f0f0; padding: 3em; text-align: center; "#,
            r#"cursor: pointer;">Click to load slides</div>"#
        )
        .to_string(),
    };

    format!(
        r#"
<div id="{slide_id}" class="slide-embed" style="margin: 2em 0;">
    <div class="slide-preview" onclick="loadSlides('{slide_id}', './{slide_file}')">
        {preview}
        <p style="text-align: center; margin-top: 0.5em;">
            <button style="padding: 0.5em 1em; background: #1976d2; color: white; border: none; border-radius: 4px; cursor: pointer;">
                View Slides
            </button>
            <a href="./{slide_file}" download style="margin-left: 1em;">Download PDF</a>
        </p>
    </div>
    <div class="slide-container" style="display: none;">
        <embed src="./{slide_file}" type="application/pdf" style="width: 100%; height: 600px; border: 1px solid #ddd;">
    </div>
</div>

<script>
function loadSlides(id, src) {{
    const container = document.querySelector(`#${{id}} .slide-container`);
    const preview = document.querySelector(`#${{id}} .slide-preview`);
    container.style.display = 'block';
    preview.style.display = 'none';
}}
</script>
"#
    )
}

// ============================================================================
// Tests
// ============================================================================
