//! Shopping cart.
//!
//! The cart is a flat list of lines keyed by `(product id, size)`. Adding a
//! product that is already in the cart in the same size bumps its quantity
//! instead of creating a second line, and a line whose quantity drops to
//! zero disappears. No line holds more than [`MAX_QUANTITY`] units. Item
//! count and total are always derived from the lines.

use serde::{Deserialize, Serialize};

use lara_core::{Price, ProductId, Size};

/// Most units of one product and size a line can hold.
pub const MAX_QUANTITY: u32 = 10;

/// Data needed to put a product in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub size: Size,
}

/// One row of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    /// Unit price for `size`.
    pub price: Price,
    pub image: String,
    pub size: Size,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// `price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }

    fn is(&self, product_id: &ProductId, size: Size) -> bool {
        &self.product_id == product_id && self.size == size
    }
}

/// A visitor's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` units of an item.
    ///
    /// Merges into an existing line with the same product and size, capping
    /// the line at [`MAX_QUANTITY`]. Adding zero units is a no-op.
    pub fn add_item(&mut self, item: NewCartLine, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let quantity = quantity.min(MAX_QUANTITY);

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.is(&item.product_id, item.size))
        {
            line.quantity = line.quantity.saturating_add(quantity).min(MAX_QUANTITY);
            return;
        }

        self.lines.push(CartLine {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            image: item.image,
            size: item.size,
            quantity,
        });
    }

    /// Remove the line for a product and size. Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: &ProductId, size: Size) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| !line.is(product_id, size));
        self.lines.len() != before
    }

    /// Set the quantity of a line, capped at [`MAX_QUANTITY`]; zero removes it.
    ///
    /// Returns `false` if no such line exists.
    pub fn update_quantity(&mut self, product_id: &ProductId, size: Size, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_item(product_id, size);
        }

        match self.lines.iter_mut().find(|line| line.is(product_id, size)) {
            Some(line) => {
                line.quantity = quantity.min(MAX_QUANTITY);
                true
            }
            None => false,
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of `price × quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rose(size: Size, cents: i64) -> NewCartLine {
        NewCartLine {
            product_id: ProductId::new("1"),
            name: "Midnight Rose".to_string(),
            price: Price::from_cents(cents),
            image: "rose.jpg".to_string(),
            size,
        }
    }

    fn breeze() -> NewCartLine {
        NewCartLine {
            product_id: ProductId::new("2"),
            name: "Ocean Breeze".to_string(),
            price: Price::from_cents(8_999),
            image: "breeze.jpg".to_string(),
            size: Size::Ml50,
        }
    }

    #[test]
    fn test_add_same_product_and_size_merges() {
        let mut cart = Cart::new();
        cart.add_item(rose(Size::Ml50, 12_999), 1);
        cart.add_item(rose(Size::Ml50, 12_999), 1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_merge_caps_line_quantity() {
        let mut cart = Cart::new();
        cart.add_item(rose(Size::Ml50, 12_999), MAX_QUANTITY);
        cart.add_item(rose(Size::Ml50, 12_999), MAX_QUANTITY);
        assert_eq!(cart.item_count(), MAX_QUANTITY);

        cart.add_item(breeze(), 50);
        assert!(cart.update_quantity(&ProductId::new("1"), Size::Ml50, 50));
        assert!(cart.lines().iter().all(|line| line.quantity == MAX_QUANTITY));
    }

    #[test]
    fn test_different_sizes_are_separate_lines() {
        let mut cart = Cart::new();
        cart.add_item(rose(Size::Ml50, 12_999), 1);
        cart.add_item(rose(Size::Ml100, 18_999), 1);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(breeze(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_is_sum_of_line_totals() {
        let mut cart = Cart::new();
        cart.add_item(rose(Size::Ml50, 12_999), 1);
        cart.add_item(breeze(), 3);
        cart.add_item(rose(Size::Ml30, 8_999), 2);

        let expected: Price = cart.lines().iter().map(CartLine::line_total).sum();
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.total(), Price::from_cents(12_999 + 3 * 8_999 + 2 * 8_999));
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_item(breeze(), 1);

        assert!(cart.update_quantity(&ProductId::new("2"), Size::Ml50, 4));
        assert_eq!(cart.item_count(), 4);
        assert!(!cart.update_quantity(&ProductId::new("2"), Size::Ml100, 4));
    }

    #[test]
    fn test_update_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(breeze(), 1);
        cart.add_item(rose(Size::Ml50, 12_999), 1);

        assert!(cart.update_quantity(&ProductId::new("2"), Size::Ml50, 0));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].name, "Midnight Rose");
    }

    #[test]
    fn test_remove_item_only_matches_size() {
        let mut cart = Cart::new();
        cart.add_item(rose(Size::Ml50, 12_999), 1);
        cart.add_item(rose(Size::Ml30, 8_999), 1);

        assert!(cart.remove_item(&ProductId::new("1"), Size::Ml30));
        assert!(!cart.remove_item(&ProductId::new("1"), Size::Ml30));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].size, Size::Ml50);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(breeze(), 2);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_session_serialization_keeps_lines() {
        let mut cart = Cart::new();
        cart.add_item(rose(Size::Ml100, 18_999), 2);

        let json = serde_json::to_value(&cart).unwrap();
        let restored: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(restored, cart);
    }
}
