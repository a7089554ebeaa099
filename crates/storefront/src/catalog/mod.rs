//! Product catalog.
//!
//! The catalog is fixed at startup and shared read-only through
//! [`AppState`](crate::state::AppState). Listing pages go through the query
//! types in [`query`]; everything else looks products up by id.

mod data;
pub mod query;

pub use query::{
    CategoryQuery, ProductQuery, ProductSort, WishlistItem, WishlistQuery, WishlistSort,
};

use lara_core::{CategoryId, Price, ProductId, Size};

use crate::models::Wishlist;

/// Products shown in the home page "featured" grid.
const FEATURED_PRODUCTS: [&str; 4] = ["1", "2", "3", "4"];

/// Categories shown in the home page showcase.
const SHOWCASE_CATEGORIES: [&str; 4] = ["floral", "fresh", "oriental", "woody"];

/// Stock level at or below which a product counts as running low.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Price of one bottle size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePrice {
    pub size: Size,
    pub price: Price,
}

/// Top, heart and base notes of a fragrance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScentNotes {
    pub top: Vec<String>,
    pub middle: Vec<String>,
    pub base: Vec<String>,
}

/// A fragrance in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Listing price, which is the 50ml price.
    pub price: Price,
    /// Pre-sale price, shown struck through.
    pub original_price: Option<Price>,
    pub image: String,
    pub gallery: Vec<String>,
    /// Average review score out of 5.
    pub rating: f32,
    pub reviews: u32,
    pub description: String,
    pub long_description: String,
    /// Display name of the category ("Floral").
    pub category: String,
    pub is_new: bool,
    pub is_sale: bool,
    pub sizes: Vec<SizePrice>,
    pub notes: ScentNotes,
    pub ingredients: String,
    pub brand: String,
    pub concentration: String,
    pub longevity: String,
    pub sillage: String,
    pub stock: u32,
}

impl Product {
    /// Price for a bottle size, if the product comes in that size.
    #[must_use]
    pub fn price_for(&self, size: Size) -> Option<Price> {
        self.sizes.iter().find(|s| s.size == size).map(|s| s.price)
    }

    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Whether the product belongs to the named category (case-insensitive).
    #[must_use]
    pub fn in_category(&self, name: &str) -> bool {
        self.category.eq_ignore_ascii_case(name)
    }
}

/// A fragrance family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Size of the full range, including products not sold online.
    pub product_count: u32,
    pub featured: bool,
}

/// Read-only product and category data.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    #[must_use]
    pub const fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// The shop's fragrance range.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(data::products(), data::categories())
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id, ignoring case.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.id.as_str().eq_ignore_ascii_case(id))
    }

    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        FEATURED_PRODUCTS
            .iter()
            .filter_map(|id| self.product(&ProductId::new(*id)))
            .collect()
    }

    #[must_use]
    pub fn showcase_categories(&self) -> Vec<&Category> {
        SHOWCASE_CATEGORIES
            .iter()
            .filter_map(|id| self.category(id))
            .collect()
    }

    /// Products in the same category, excluding `product` itself.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.id != product.id && p.in_category(&product.category))
            .take(limit)
            .collect()
    }

    #[must_use]
    pub fn in_category(&self, category: &Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.in_category(&category.name))
            .collect()
    }

    /// Products at or below [`LOW_STOCK_THRESHOLD`], out of stock included.
    #[must_use]
    pub fn low_stock(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.stock <= LOW_STOCK_THRESHOLD)
            .collect()
    }

    /// Filter and sort products for the listing page.
    #[must_use]
    pub fn search(&self, query: &ProductQuery) -> Vec<&Product> {
        let mut found: Vec<&Product> = self.products.iter().filter(|p| query.matches(p)).collect();
        query.sort.apply(&mut found);
        found
    }

    #[must_use]
    pub fn search_categories(&self, query: &CategoryQuery) -> Vec<&Category> {
        self.categories.iter().filter(|c| query.matches(c)).collect()
    }

    /// Resolve wishlist entries against the catalog, then filter and sort.
    ///
    /// Entries whose product no longer exists are skipped.
    #[must_use]
    pub fn wishlist_items<'a>(
        &'a self,
        wishlist: &'a Wishlist,
        query: &WishlistQuery,
    ) -> Vec<WishlistItem<'a>> {
        let mut items: Vec<WishlistItem<'a>> = wishlist
            .entries()
            .iter()
            .filter_map(|entry| {
                self.product(&entry.product_id)
                    .map(|product| WishlistItem { entry, product })
            })
            .filter(|item| query.matches(item.product))
            .collect();
        query.sort.apply(&mut items);
        items
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_seeded_catalog_shape() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.products().len(), 8);
        assert_eq!(catalog.categories().len(), 8);
    }

    #[test]
    fn test_listing_price_is_50ml_price() {
        let catalog = Catalog::seeded();
        for product in catalog.products() {
            assert_eq!(product.price_for(Size::Ml50), Some(product.price), "{}", product.name);
            assert!(product.price_for(Size::Ml30) < product.price_for(Size::Ml100));
        }
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::seeded();
        let rose = catalog.product(&ProductId::new("1")).unwrap();
        assert_eq!(rose.name, "Midnight Rose");
        assert_eq!(rose.price, Price::from_cents(12_999));
        assert_eq!(rose.price_for(Size::Ml30), Some(Price::from_cents(8_999)));
        assert!(catalog.product(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_featured_and_showcase() {
        let catalog = Catalog::seeded();
        assert_eq!(ids(&catalog.featured()), ["1", "2", "3", "4"]);

        let showcase: Vec<&str> = catalog
            .showcase_categories()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(showcase, ["floral", "fresh", "oriental", "woody"]);
    }

    #[test]
    fn test_related_excludes_self_and_other_categories() {
        let catalog = Catalog::seeded();
        let rose = catalog.product(&ProductId::new("1")).unwrap();
        let related = catalog.related(rose, 4);

        assert!(!related.is_empty());
        assert!(related.iter().all(|p| p.id != rose.id && p.category == "Floral"));
    }

    #[test]
    fn test_category_lookup_ignores_case() {
        let catalog = Catalog::seeded();
        let woody = catalog.category("WOODY").unwrap();
        assert_eq!(woody.name, "Woody");
        assert_eq!(ids(&catalog.in_category(woody)), ["7"]);
    }

    #[test]
    fn test_low_stock_includes_sold_out() {
        let catalog = Catalog::seeded();
        let low = catalog.low_stock();
        assert!(low.iter().all(|p| p.stock <= LOW_STOCK_THRESHOLD));
        assert!(low.iter().any(|p| !p.in_stock()));
    }
}
