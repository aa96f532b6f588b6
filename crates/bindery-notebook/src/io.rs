//! Reading and writing notebook files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bindery_core::{Error, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::model::Notebook;

/// Read and parse a notebook file.
pub fn read_notebook(path: &Path) -> Result<Notebook> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    let notebook = serde_json::from_str(&content)?;
    Ok(notebook)
}

/// Write a notebook with one-space indentation.
///
/// One space matches the format the authoring tools emit, so published
/// copies diff cleanly against their sources.
pub fn write_notebook(notebook: &Notebook, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io_with_path(e, path))?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b" ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    notebook.serialize(&mut serializer)?;

    writer.flush().map_err(|e| Error::io_with_path(e, path))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
