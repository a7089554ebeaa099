//! Session wishlist.
//!
//! Stores only product references and the day they were saved; everything
//! shown on the wishlist page is looked up in the catalog at render time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use lara_core::ProductId;

/// A saved product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub product_id: ProductId,
    pub added_on: NaiveDate,
}

/// A visitor's wishlist, newest entries last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// The starter wishlist every new account sees.
    #[must_use]
    pub fn starter() -> Self {
        let seed = [("7", (2024, 1, 5)), ("6", (2024, 1, 10)), ("5", (2024, 1, 15))];

        Self {
            entries: seed
                .into_iter()
                .filter_map(|(id, (y, m, d))| {
                    NaiveDate::from_ymd_opt(y, m, d).map(|added_on| WishlistEntry {
                        product_id: ProductId::new(id),
                        added_on,
                    })
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entries.iter().any(|e| &e.product_id == product_id)
    }

    /// Add the product if missing, remove it if present.
    ///
    /// Returns `true` when the product is now on the wishlist.
    pub fn toggle(&mut self, product_id: ProductId, today: NaiveDate) -> bool {
        if self.remove(&product_id) {
            false
        } else {
            self.entries.push(WishlistEntry {
                product_id,
                added_on: today,
            });
            true
        }
    }

    /// Returns whether the product was on the wishlist.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.product_id != product_id);
        self.entries.len() != before
    }

    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
    }

    #[test]
    fn test_starter_has_three_entries() {
        let wishlist = Wishlist::starter();
        assert_eq!(wishlist.len(), 3);
        assert!(wishlist.contains(&ProductId::new("5")));
        assert!(wishlist.contains(&ProductId::new("7")));
        assert!(!wishlist.contains(&ProductId::new("1")));
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = Wishlist::default();

        assert!(wishlist.toggle(ProductId::new("2"), day(1)));
        assert!(wishlist.contains(&ProductId::new("2")));
        assert_eq!(wishlist.entries()[0].added_on, day(1));

        assert!(!wishlist.toggle(ProductId::new("2"), day(2)));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_remove_missing_is_false() {
        let mut wishlist = Wishlist::starter();
        assert!(!wishlist.remove(&ProductId::new("8")));
        assert!(wishlist.remove(&ProductId::new("6")));
        assert_eq!(wishlist.len(), 2);
    }
}
