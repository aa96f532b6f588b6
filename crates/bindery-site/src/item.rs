//! The published-item record.
//!
//! Each processed notebook or page yields an [`ItemRecord`]; the index
//! renderer works entirely from these, never re-reading the sources.

use bindery_notebook::LinkRef;

/// What kind of source an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A Jupyter notebook, published as worksheet + answers pair.
    Notebook,
    /// A markdown page, published as a standalone HTML file.
    Page,
}

/// Everything the index needs to know about one published item.
#[derive(Debug, Clone)]
pub struct ItemRecord {
    /// File stem of the source.
    pub name: String,
    /// Display title.
    pub title: String,
    /// Short description, possibly empty.
    pub description: String,
    /// Display title of the section the item belongs to.
    pub section: String,
    /// Source kind.
    pub kind: ItemKind,
    /// Worksheet file name (notebooks only).
    pub worksheet_file: Option<String>,
    /// Answers file name (notebooks only).
    pub answers_file: Option<String>,
    /// Rendered HTML file name (pages only).
    pub html_file: Option<String>,
    /// Data bundle file name, when the item ships data.
    pub data_file: Option<String>,
    /// Explicit position within the section listing.
    pub order: Option<i64>,
    /// Reference links listed with the item.
    pub links: Vec<LinkRef>,
    /// Slide deck path, own or inherited from the section.
    pub slides: Option<String>,
    /// Whether `slides` came from the section rather than the item; the
    /// index suppresses the per-item slides line then, since the section
    /// embed already shows the deck.
    pub slides_inherited: bool,
}

impl ItemRecord {
    /// Whether the index should list this item's slides individually.
    pub fn own_slides(&self) -> Option<&str> {
        if self.slides_inherited {
            None
        } else {
            self.slides.as_deref()
        }
    }
}
