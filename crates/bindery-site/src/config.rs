//! Workshop configuration.
//!
//! A workshop is configured by a `workshop-config.yaml` at the project
//! root:
//!
//! ```yaml
//! title: Document Wrangling Workshop
//! description: Two days of extracting data from awkward files.
//! github_repo: example/doc-workshop
//! github_branch: main
//! output_dir: docs
//! install: pandas tqdm
//! sections:
//!   - folder: 01-intro
//!     title: Getting Started
//!     slides: 01-intro/kickoff.pdf
//!   - 02-tables
//! ```
//!
//! Sections are either bare folder names or maps with a display title and
//! optional section-wide slide deck.

use std::path::Path;

use bindery_core::{Error, Result};
use serde::Deserialize;

/// Top-level workshop configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorkshopConfig {
    /// GitHub `owner/repo` the published site lives in; used for Colab
    /// links and setup-cell download URLs.
    pub github_repo: String,
    /// Branch the site is published from.
    pub github_branch: String,
    /// Workshop title, used on the index page.
    pub title: String,
    /// Workshop description, used on the index page.
    pub description: String,
    /// Author name for the index template.
    pub author: String,
    /// Organization name for the index template.
    pub organization: String,
    /// Output directory, relative to the project root.
    pub output_dir: String,
    /// Default packages installed by setup cells when an item does not
    /// declare its own `install` list.
    pub install: Option<String>,
    /// Markdown template for the index page. Placeholders: `{{ title }}`,
    /// `{{ description }}`, `{{ notebooks }}`, `{{ author }}`,
    /// `{{ organization }}`.
    pub index_template: Option<String>,
    /// Content sections, in display order.
    pub sections: Vec<SectionEntry>,
}

impl Default for WorkshopConfig {
    fn default() -> Self {
        Self {
            github_repo: String::new(),
            github_branch: "main".to_string(),
            title: "Workshop".to_string(),
            description: String::new(),
            author: String::new(),
            organization: String::new(),
            output_dir: "docs".to_string(),
            install: None,
            index_template: None,
            sections: Vec::new(),
        }
    }
}

impl WorkshopConfig {
    /// Resolve the configured sections, dropping entries without a folder
    /// (with a warning, since that is an authoring mistake).
    pub fn resolved_sections(&self) -> Vec<SectionSpec> {
        self.sections
            .iter()
            .filter_map(|entry| {
                let spec = entry.resolve();
                if spec.is_none() {
                    log::warn!("ignoring section entry without a folder");
                }
                spec
            })
            .collect()
    }

    /// Default setup-cell packages, split into names.
    pub fn default_install(&self) -> Vec<String> {
        self.install
            .as_deref()
            .map(|spec| spec.split_whitespace().map(String::from).collect())
            .unwrap_or_default()
    }
}

/// A section as written in the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SectionEntry {
    /// Bare folder name: `- 02-tables`
    Folder(String),
    /// Full form with display title and optional slides.
    Detailed {
        /// Folder the section's items live in.
        #[serde(default)]
        folder: Option<String>,
        /// Display title; defaults to the folder name.
        #[serde(default)]
        title: Option<String>,
        /// Section-wide slide deck, shown on the index and inherited by
        /// items without their own.
        #[serde(default)]
        slides: Option<String>,
    },
}

impl SectionEntry {
    /// Resolve to a concrete section spec; `None` when no folder is given.
    pub fn resolve(&self) -> Option<SectionSpec> {
        match self {
            SectionEntry::Folder(folder) => Some(SectionSpec {
                folder: folder.clone(),
                title: folder.clone(),
                slides: None,
            }),
            SectionEntry::Detailed {
                folder,
                title,
                slides,
            } => {
                let folder = folder.clone()?;
                Some(SectionSpec {
                    title: title.clone().unwrap_or_else(|| folder.clone()),
                    folder,
                    slides: slides.clone(),
                })
            }
        }
    }
}

/// A resolved content section.
#[derive(Debug, Clone)]
pub struct SectionSpec {
    /// Folder the section's items live in, relative to the project root.
    pub folder: String,
    /// Display title used for grouping on the index.
    pub title: String,
    /// Section-wide slide deck.
    pub slides: Option<String>,
}

/// Load the workshop configuration.
///
/// A missing file is not an error: the pipeline runs with defaults so a
/// bare checkout still builds, but a warning is logged since a real
/// workshop always configures its sections.
pub fn load_config(path: &Path) -> Result<WorkshopConfig> {
    if !path.exists() {
        log::warn!("{} not found, using defaults", path.display());
        return Ok(WorkshopConfig::default());
    }

    let text = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    let config: WorkshopConfig = serde_yaml::from_str(&text)?;
    Ok(config)
}

// ============================================================================
// Tests
// ============================================================================
