//! Publishing transforms applied to notebook variants.
//!
//! Both published variants start from the authored notebook:
//!
//! - the **answers** copy is the notebook as written
//! - the **worksheet** copy has every `solution`-tagged cell replaced by an
//!   empty code cell
//!
//! Both get a normalized python3 kernelspec, and both receive the same
//! synthesized cells (setup cell, slide link) so the variants stay aligned
//! cell-for-cell.

use serde_json::{Map, Value, json};

use crate::model::{Cell, Notebook};

/// Force the python3 kernelspec on a published notebook.
///
/// Authored notebooks carry whatever kernel the author ran locally;
/// published copies must open cleanly on hosted runtimes.
pub fn normalize_kernelspec(notebook: &mut Notebook) {
    let kernelspec = notebook
        .metadata
        .entry("kernelspec".to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    if !kernelspec.is_object() {
        *kernelspec = Value::Object(Map::new());
    }
    if let Some(spec) = kernelspec.as_object_mut() {
        spec.insert("name".to_string(), json!("python3"));
        spec.insert("display_name".to_string(), json!("Python 3"));
        spec.insert("language".to_string(), json!("python"));
    }
}

/// Produce the worksheet variant: every `solution`-tagged cell becomes an
/// empty code cell, everything else passes through unchanged.
pub fn clear_solutions(notebook: &Notebook) -> Notebook {
    let mut worksheet = notebook.clone();
    for cell in &mut worksheet.cells {
        if cell.has_tag("solution") {
            *cell = Cell::empty_code();
        }
    }
    worksheet
}

/// Insert the setup cell after the first markdown cell.
///
/// Notebooks conventionally open with a title/intro markdown cell; the
/// setup cell goes right after it so the intro stays on top. A notebook
/// with no markdown cell gets the setup cell first.
pub fn insert_setup_cell(notebook: &mut Notebook, cell: Cell) {
    let position = notebook
        .cells
        .iter()
        .position(Cell::is_markdown)
        .map(|i| i + 1)
        .unwrap_or(0);
    notebook.cells.insert(position, cell);
}

/// Insert a cell at the very top of the notebook.
pub fn prepend_cell(notebook: &mut Notebook, cell: Cell) {
    notebook.cells.insert(0, cell);
}

// ============================================================================
// Tests
// ============================================================================
