//! # Catalog Parsing
//!
//! Converts tabular spreadsheet rows into an ordered list of named
//! sections of priced items.
//!
//! ## Row rules
//!
//! Evaluated top to bottom, first match wins, after trailing empty cells
//! are stripped (spreadsheet readers pad every row to the sheet width):
//!
//! 1. Exactly one text cell -> section header. The label is upper-cased
//!    and becomes the active section until the next header.
//! 2. First cell text, second cell number -> item row, appended to the
//!    active section. Cells past the second (notes columns and the
//!    like) are ignored. Sections are created lazily on first item.
//! 3. Anything else -> silently skipped.
//!
//! Items before any header land in a default `"GENERAL"` section.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::catalog::{parse_rows, Cell};
//!
//! let rows = vec![
//!     vec![Cell::Text("Widgets".to_string())],
//!     vec![Cell::Text("Bolt".to_string()), Cell::Number(10.0)],
//! ];
//!
//! let catalog = parse_rows(rows);
//! assert_eq!(catalog.sections[0].title, "WIDGETS");
//! assert_eq!(catalog.sections[0].items[0].price, 10.0);
//! ```

use serde::{Deserialize, Serialize};

/// Section label used for items that appear before any header row.
pub const DEFAULT_SECTION: &str = "GENERAL";

/// A spreadsheet cell value, reduced to the shapes the parser cares
/// about. Everything the classification rules do not inspect (booleans,
/// formula errors, dates) collapses into [`Cell::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// Text content
    Text(String),
    /// Numeric content
    Number(f64),
    /// Empty cell
    Empty,
    /// Anything else (bool, error value, date, ...)
    Other,
}

impl Cell {
    /// Whether this cell is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A single priced catalog entry.
///
/// The `id` is assigned sequentially during parsing and is only stable
/// within one parse: re-loading a workbook produces a fresh catalog with
/// fresh ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Sequential identity, starting at 0 across the whole parse
    pub id: u32,
    /// Display name (first cell of the item row)
    pub name: String,
    /// Unit price (second cell of the item row)
    pub price: f64,
}

/// A named group of catalog items, established by a single-cell header
/// row. Sections preserve first-seen order; items preserve row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Display label, upper-cased
    pub title: String,
    /// Items in original row order
    pub items: Vec<CatalogItem>,
}

/// The full parsed catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Sections in first-seen order
    pub sections: Vec<Section>,
}

impl Catalog {
    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Whether the catalog has no items at all.
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Look up an item by its parse-assigned id.
    pub fn item(&self, id: u32) -> Option<&CatalogItem> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|item| item.id == id)
    }
}

/// How a single row classified.
#[derive(Debug, Clone, PartialEq)]
enum RowKind {
    /// Single text cell: section header with this label (already upper-cased)
    Header(String),
    /// Text + number: an item row
    Item { name: String, price: f64 },
    /// Wrong shape, wrong types, or blank: ignored
    Skip,
}

/// Classify one row. Pure function over the cell union; trailing empty
/// cells are ignored so that a header row in a two-column sheet still
/// counts as "exactly one cell".
fn classify_row(cells: &[Cell]) -> RowKind {
    let trimmed = match cells.iter().rposition(|c| !c.is_empty()) {
        Some(last) => &cells[..=last],
        None => return RowKind::Skip,
    };

    match trimmed {
        [Cell::Text(label)] => RowKind::Header(label.to_uppercase()),
        // Only the first two cells matter for item rows; a notes column
        // or other trailing content is ignored.
        [Cell::Text(name), Cell::Number(price), ..] if *price >= 0.0 => RowKind::Item {
            name: name.clone(),
            price: *price,
        },
        _ => RowKind::Skip,
    }
}

/// Parse spreadsheet rows into a catalog.
///
/// Never fails: rows that do not match the item or header shape are
/// silently skipped, so the worst case is an empty catalog.
pub fn parse_rows(rows: Vec<Vec<Cell>>) -> Catalog {
    let mut catalog = Catalog::default();
    let mut active_label = DEFAULT_SECTION.to_string();
    let mut next_id: u32 = 0;

    for row in &rows {
        match classify_row(row) {
            RowKind::Header(label) => active_label = label,
            RowKind::Item { name, price } => {
                let item = CatalogItem {
                    id: next_id,
                    name,
                    price,
                };
                next_id += 1;
                section_for(&mut catalog, &active_label).items.push(item);
            }
            RowKind::Skip => {}
        }
    }

    catalog
}

/// Find the section with this exact label, creating it at the end of the
/// list on first use.
fn section_for<'a>(catalog: &'a mut Catalog, label: &str) -> &'a mut Section {
    let index = match catalog.sections.iter().position(|s| s.title == label) {
        Some(i) => i,
        None => {
            catalog.sections.push(Section {
                title: label.to_string(),
                items: Vec::new(),
            });
            catalog.sections.len() - 1
        }
    };
    &mut catalog.sections[index]
}
