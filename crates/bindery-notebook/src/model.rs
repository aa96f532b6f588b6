//! serde model of the `.ipynb` file format (nbformat 4).
//!
//! The model is deliberately loose: only the fields the publishing
//! transforms need are typed, and everything else — cell ids, attachments,
//! outputs, execution counts — rides along in flattened maps so a
//! read-modify-write cycle preserves it byte-for-byte (modulo formatting).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// A Jupyter notebook document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    /// The notebook's cells, in document order.
    pub cells: Vec<Cell>,
    /// Notebook-level metadata (kernelspec, language_info, workshop, ...).
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Major format version.
    #[serde(default = "default_nbformat")]
    pub nbformat: u64,
    /// Minor format version.
    #[serde(default = "default_nbformat_minor")]
    pub nbformat_minor: u64,
    /// Any top-level fields this model does not know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_nbformat() -> u64 {
    4
}

fn default_nbformat_minor() -> u64 {
    5
}

impl Notebook {
    /// Create an empty notebook with the given cells.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            metadata: Map::new(),
            nbformat: default_nbformat(),
            nbformat_minor: default_nbformat_minor(),
            extra: Map::new(),
        }
    }
}

/// A single notebook cell.
///
/// `rest` carries the fields that vary by cell type (`execution_count`,
/// `outputs`, `id`, `attachments`) untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    /// One of `markdown`, `code`, or `raw`.
    pub cell_type: String,
    /// Cell metadata; publishing tags live under `metadata.tags`.
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Cell source, as a list of line strings or a single string.
    #[serde(default)]
    pub source: Source,
    /// Remaining cell fields, preserved as-is.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Cell {
    /// Create a markdown cell from source lines.
    pub fn markdown(lines: Vec<String>) -> Self {
        Self {
            cell_type: "markdown".to_string(),
            metadata: Map::new(),
            source: Source::Lines(lines),
            rest: Map::new(),
        }
    }

    /// Create a code cell from source lines, with no outputs and a null
    /// execution count.
    pub fn code(lines: Vec<String>) -> Self {
        let mut rest = Map::new();
        rest.insert("execution_count".to_string(), Value::Null);
        rest.insert("outputs".to_string(), json!([]));
        Self {
            cell_type: "code".to_string(),
            metadata: Map::new(),
            source: Source::Lines(lines),
            rest,
        }
    }

    /// Create an empty code cell — the worksheet replacement for a
    /// solution cell.
    pub fn empty_code() -> Self {
        Self::code(Vec::new())
    }

    /// Whether this is a markdown cell.
    pub fn is_markdown(&self) -> bool {
        self.cell_type == "markdown"
    }

    /// Whether this is a code cell.
    pub fn is_code(&self) -> bool {
        self.cell_type == "code"
    }

    /// Whether `metadata.tags` contains the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.metadata
            .get("tags")
            .and_then(|t| t.as_array())
            .is_some_and(|tags| tags.iter().any(|t| t.as_str() == Some(tag)))
    }

    /// The cell's source joined into a single string.
    pub fn source_text(&self) -> String {
        self.source.text()
    }
}

/// Cell source: the format allows either a list of line strings or one
/// plain string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Source {
    /// Source split into lines (each usually newline-terminated).
    Lines(Vec<String>),
    /// Source as a single string.
    Text(String),
}

impl Default for Source {
    fn default() -> Self {
        Source::Lines(Vec::new())
    }
}

impl Source {
    /// The source joined into a single string.
    pub fn text(&self) -> String {
        match self {
            Source::Lines(lines) => lines.concat(),
            Source::Text(text) => text.clone(),
        }
    }

    /// Whether the source is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Source::Lines(lines) => lines.iter().all(|l| l.is_empty()),
            Source::Text(text) => text.is_empty(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
