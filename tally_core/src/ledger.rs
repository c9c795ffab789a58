//! # Selection Ledger
//!
//! In-memory mapping from catalog item identity to a chosen quantity.
//! Entries keep a denormalized copy of the item's name and price, so the
//! ledger never reaches back into the catalog; re-parsing a workbook
//! simply resets it.
//!
//! Entries are stored in first-insert order because the exported quote
//! lists items in the order they were first selected.
//!
//! ## Invariant
//!
//! An entry with quantity 0 never exists: `decrement` removes the entry
//! when the count reaches zero instead of leaving it behind.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

/// One selected item with its chosen quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionEntry {
    /// Catalog identity at selection time
    pub id: u32,
    /// Name copied from the catalog when first selected
    pub name: String,
    /// Unit price copied from the catalog when first selected
    pub price: f64,
    /// Chosen quantity, always >= 1 while the entry exists
    pub quantity: u32,
}

impl SelectionEntry {
    /// Line subtotal: price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// The set of currently selected items, in first-insert order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionLedger {
    entries: Vec<SelectionEntry>,
}

impl SelectionLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of `item`: creates an entry with quantity 1 on first
    /// selection, bumps the quantity afterwards. No upper bound.
    pub fn increment(&mut self, item: &CatalogItem) {
        match self.entries.iter_mut().find(|e| e.id == item.id) {
            Some(entry) => entry.quantity += 1,
            None => self.entries.push(SelectionEntry {
                id: item.id,
                name: item.name.clone(),
                price: item.price,
                quantity: 1,
            }),
        }
    }

    /// Remove one of the item with this id. The entry disappears when its
    /// quantity reaches zero; decrementing an absent id is a no-op.
    pub fn decrement(&mut self, id: u32) {
        if let Some(index) = self.entries.iter().position(|e| e.id == id) {
            let entry = &mut self.entries[index];
            entry.quantity -= 1;
            if entry.quantity == 0 {
                self.entries.remove(index);
            }
        }
    }

    /// Current quantity for an id, 0 if not selected.
    pub fn quantity(&self, id: u32) -> u32 {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.quantity)
            .unwrap_or(0)
    }

    /// Sum of price * quantity over all entries; 0.0 when empty.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(SelectionEntry::subtotal).sum()
    }

    /// Clear all entries. Invoked when a new catalog replaces the old one.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Entries in first-insert order.
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// Number of distinct selected items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, price: f64) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn test_increment_creates_then_bumps() {
        let mut ledger = SelectionLedger::new();
        let bolt = item(0, "Bolt", 10.0);

        ledger.increment(&bolt);
        assert_eq!(ledger.quantity(0), 1);

        ledger.increment(&bolt);
        assert_eq!(ledger.quantity(0), 2);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_increment_then_decrement_removes_entry() {
        let mut ledger = SelectionLedger::new();
        ledger.increment(&item(3, "Nut", 5.0));
        ledger.decrement(3);

        assert!(ledger.is_empty());
        assert_eq!(ledger.quantity(3), 0);
        assert_eq!(ledger.total(), 0.0);
    }

    #[test]
    fn test_decrement_absent_id_is_noop() {
        let mut ledger = SelectionLedger::new();
        ledger.increment(&item(0, "Bolt", 10.0));

        let before = ledger.clone();
        ledger.decrement(99);
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_total_sums_price_times_quantity() {
        let mut ledger = SelectionLedger::new();
        let bolt = item(0, "Bolt", 10.0);
        let led = item(2, "LED", 2.0);

        ledger.increment(&bolt);
        ledger.increment(&bolt);
        ledger.increment(&led);

        assert_eq!(ledger.total(), 22.0);
    }

    #[test]
    fn test_total_empty_is_zero() {
        assert_eq!(SelectionLedger::new().total(), 0.0);
    }

    #[test]
    fn test_entries_keep_first_insert_order() {
        let mut ledger = SelectionLedger::new();
        ledger.increment(&item(5, "Late id, first pick", 1.0));
        ledger.increment(&item(1, "Second pick", 1.0));
        ledger.increment(&item(5, "Late id, first pick", 1.0));

        let ids: Vec<u32> = ledger.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![5, 1]);
    }

    #[test]
    fn test_entry_copies_are_denormalized() {
        let mut ledger = SelectionLedger::new();
        ledger.increment(&item(0, "Bolt", 10.0));

        let entry = &ledger.entries()[0];
        assert_eq!(entry.name, "Bolt");
        assert_eq!(entry.price, 10.0);
        assert_eq!(entry.subtotal(), 10.0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut ledger = SelectionLedger::new();
        ledger.increment(&item(0, "Bolt", 10.0));
        ledger.increment(&item(1, "Nut", 5.0));

        ledger.reset();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), 0.0);
    }
}
