//! # tally_core - Quote Building Engine
//!
//! `tally_core` is the logic layer of Tally: it parses a spreadsheet
//! price catalog into sections, tracks which items the user has selected
//! and in what quantity, and renders the resulting quote as a PDF. It
//! carries no UI dependencies; both the GUI and the CLI drive the same
//! state transitions.
//!
//! ## Design Philosophy
//!
//! - **Explicit state**: one [`quote::Quote`] value holds everything the
//!   UI shows; all mutation goes through its transition methods
//! - **Forgiving import**: rows that do not look like items or headers
//!   are skipped, never errors
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use tally_core::catalog::{parse_rows, Cell};
//! use tally_core::quote::Quote;
//!
//! let mut quote = Quote::new("Luna Cakes", "Maria");
//! quote.load_catalog(parse_rows(vec![
//!     vec![Cell::Text("Widgets".to_string())],
//!     vec![Cell::Text("Bolt".to_string()), Cell::Number(10.0)],
//! ]));
//!
//! quote.increment(0);
//! assert_eq!(quote.total(), 10.0);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Spreadsheet row classification and section building
//! - [`workbook`] - First-sheet workbook import via calamine
//! - [`ledger`] - Selection ledger (quantities, totals)
//! - [`quote`] - Root state container and transitions
//! - [`pdf`] - Typst-based quote rendering
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod errors;
pub mod ledger;
pub mod pdf;
pub mod quote;
pub mod workbook;

// Re-export commonly used types at crate root for convenience
pub use catalog::{Catalog, CatalogItem, Cell, Section};
pub use errors::{QuoteError, QuoteResult};
pub use ledger::{SelectionEntry, SelectionLedger};
pub use pdf::render_quote_pdf;
pub use quote::{Quote, QuoteMetadata};
pub use workbook::{read_catalog_bytes, read_catalog_file};
