//! # Quote State
//!
//! The `Quote` struct is the root container for everything the UI shows:
//! the parsed catalog, the selection ledger, and the two free-text name
//! fields. All mutation goes through the transition methods here so the
//! ledger invariants are enforced in one place, independent of any
//! rendering layer.
//!
//! ## Structure
//!
//! ```text
//! Quote
//! ├── meta: QuoteMetadata (business/buyer names, timestamps)
//! ├── catalog: Catalog (sections of priced items)
//! └── ledger: SelectionLedger (chosen quantities)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tally_core::quote::Quote;
//! use tally_core::catalog::{parse_rows, Cell};
//!
//! let mut quote = Quote::new("Luna Cakes", "A. Buyer");
//! quote.load_catalog(parse_rows(vec![
//!     vec![Cell::Text("Bolt".to_string()), Cell::Number(10.0)],
//! ]));
//!
//! quote.increment(0);
//! assert_eq!(quote.total(), 10.0);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::ledger::SelectionLedger;

/// Root state container for one quoting session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Names and timestamps
    pub meta: QuoteMetadata,

    /// The currently loaded catalog (wholesale replaced on re-load)
    pub catalog: Catalog,

    /// Selected items and quantities
    pub ledger: SelectionLedger,
}

impl Quote {
    /// Create an empty quote session.
    pub fn new(business_name: impl Into<String>, buyer_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Quote {
            meta: QuoteMetadata {
                business_name: business_name.into(),
                buyer_name: buyer_name.into(),
                created: now,
                modified: now,
            },
            catalog: Catalog::default(),
            ledger: SelectionLedger::new(),
        }
    }

    /// Replace the catalog wholesale and reset the ledger.
    ///
    /// Selections from a previous catalog are meaningless against a new
    /// one - the item ids restart at 0 on every parse.
    pub fn load_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.ledger.reset();
        self.touch();
    }

    /// Add one of the item with this id. Unknown ids (stale messages from
    /// a previous catalog) are ignored.
    pub fn increment(&mut self, id: u32) {
        if let Some(item) = self.catalog.item(id).cloned() {
            self.ledger.increment(&item);
            self.touch();
        }
    }

    /// Remove one of the item with this id; no-op when not selected.
    pub fn decrement(&mut self, id: u32) {
        self.ledger.decrement(id);
        self.touch();
    }

    /// Running total over all selected items.
    pub fn total(&self) -> f64 {
        self.ledger.total()
    }

    /// Set the business name shown as the quote title.
    pub fn set_business_name(&mut self, name: impl Into<String>) {
        self.meta.business_name = name.into();
        self.touch();
    }

    /// Set the buyer name used for the export file name.
    pub fn set_buyer_name(&mut self, name: impl Into<String>) {
        self.meta.buyer_name = name.into();
        self.touch();
    }

    /// Suggested file name for the exported PDF: the buyer name plus
    /// `.pdf`, falling back to a fixed stem when the field is blank.
    pub fn export_file_name(&self) -> String {
        let stem = self.meta.buyer_name.trim();
        if stem.is_empty() {
            "quote.pdf".to_string()
        } else {
            format!("{}.pdf", stem)
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for Quote {
    fn default() -> Self {
        Quote::new("", "")
    }
}

/// Display labels and timestamps for one quote session. The names are
/// free text and never validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteMetadata {
    /// Business name rendered as the document title
    pub business_name: String,

    /// Buyer name used to name the exported file
    pub buyer_name: String,

    /// When the session was created
    pub created: DateTime<Utc>,

    /// When the state last changed
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{parse_rows, Cell};

    fn sample_catalog() -> Catalog {
        parse_rows(vec![
            vec![Cell::Text("WIDGETS".to_string())],
            vec![Cell::Text("Bolt".to_string()), Cell::Number(10.0)],
            vec![Cell::Text("Nut".to_string()), Cell::Number(5.0)],
        ])
    }

    #[test]
    fn test_quote_creation() {
        let quote = Quote::new("Luna Cakes", "A. Buyer");
        assert_eq!(quote.meta.business_name, "Luna Cakes");
        assert_eq!(quote.meta.buyer_name, "A. Buyer");
        assert!(quote.catalog.is_empty());
        assert!(quote.ledger.is_empty());
    }

    #[test]
    fn test_increment_copies_from_catalog() {
        let mut quote = Quote::default();
        quote.load_catalog(sample_catalog());

        quote.increment(1);
        let entry = &quote.ledger.entries()[0];
        assert_eq!(entry.name, "Nut");
        assert_eq!(entry.price, 5.0);
    }

    #[test]
    fn test_increment_unknown_id_is_noop() {
        let mut quote = Quote::default();
        quote.load_catalog(sample_catalog());

        quote.increment(42);
        assert!(quote.ledger.is_empty());
    }

    #[test]
    fn test_reload_resets_ledger() {
        let mut quote = Quote::default();
        quote.load_catalog(sample_catalog());
        quote.increment(0);
        quote.increment(0);
        assert_eq!(quote.total(), 20.0);

        // New parse invalidates all prior identities
        quote.load_catalog(sample_catalog());
        assert_eq!(quote.total(), 0.0);
        assert!(quote.ledger.is_empty());
    }

    #[test]
    fn test_export_file_name() {
        let mut quote = Quote::new("Shop", "Maria");
        assert_eq!(quote.export_file_name(), "Maria.pdf");

        quote.set_buyer_name("   ");
        assert_eq!(quote.export_file_name(), "quote.pdf");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut quote = Quote::new("Shop", "Maria");
        quote.load_catalog(sample_catalog());
        quote.increment(0);

        let json = serde_json::to_string_pretty(&quote).unwrap();
        let roundtrip: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.buyer_name, "Maria");
        assert_eq!(roundtrip.total(), 10.0);
    }
}
