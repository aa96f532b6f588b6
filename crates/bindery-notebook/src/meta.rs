//! The `metadata.workshop` publishing contract.
//!
//! A notebook opts into publishing by carrying a `workshop` object in its
//! notebook-level metadata:
//!
//! ```json
//! {
//!   "metadata": {
//!     "workshop": {
//!       "title": "Extracting tables",
//!       "description": "Pull tables out of report PDFs",
//!       "order": 2,
//!       "data_files": ["data/*.csv"],
//!       "install": "pandas tqdm",
//!       "links": [{"name": "Docs", "url": "https://example.com"}],
//!       "slides": "slides/tables.pdf"
//!     }
//!   }
//! }
//! ```
//!
//! Notebooks without the object are authoring scratch files and are
//! skipped by the pipeline.

use bindery_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::model::Notebook;

/// Publishing metadata for a single workshop item.
///
/// Shared by notebooks (under `metadata.workshop`) and markdown pages
/// (as YAML frontmatter).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkshopMeta {
    /// Display title; the file stem is used when absent.
    pub title: Option<String>,
    /// Short description shown on the index page.
    pub description: Option<String>,
    /// Explicit position within the section listing.
    pub order: Option<i64>,
    /// Glob patterns (relative to the item's folder) bundled into the
    /// item's data zip.
    #[serde(default)]
    pub data_files: Vec<String>,
    /// Packages the setup cell installs.
    pub install: Option<Install>,
    /// Reference links listed with the item.
    #[serde(default)]
    pub links: Vec<LinkRef>,
    /// Slide deck path, relative to the item's folder.
    pub slides: Option<String>,
}

/// Package list for the setup cell: either a whitespace-separated string
/// or an explicit list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Install {
    /// `install: "pandas tqdm"`
    Spec(String),
    /// `install: ["pandas", "tqdm"]`
    Packages(Vec<String>),
}

impl Install {
    /// The individual package names, empty entries dropped.
    pub fn packages(&self) -> Vec<String> {
        match self {
            Install::Spec(spec) => spec.split_whitespace().map(String::from).collect(),
            Install::Packages(list) => list
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

/// A reference link attached to an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRef {
    /// Display name.
    #[serde(default = "LinkRef::default_name")]
    pub name: String,
    /// Target URL.
    #[serde(default = "LinkRef::default_url")]
    pub url: String,
    /// Optional one-line description.
    #[serde(default)]
    pub description: String,
}

impl LinkRef {
    fn default_name() -> String {
        "Link".to_string()
    }

    fn default_url() -> String {
        "#".to_string()
    }
}

/// Extract the workshop metadata from a notebook.
///
/// Returns `Ok(None)` when the notebook carries no `workshop` object (not
/// published). Returns an error when the object is present but malformed,
/// so authoring mistakes surface instead of silently dropping an item's
/// configuration.
pub fn workshop_meta(notebook: &Notebook) -> Result<Option<WorkshopMeta>> {
    match notebook.metadata.get("workshop") {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => {
            let meta: WorkshopMeta = serde_json::from_value(value.clone())
                .map_err(|e| Error::parse(format!("invalid workshop metadata: {e}")))?;
            Ok(Some(meta))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
