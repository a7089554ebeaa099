//! Search, filter and sort options for the listing pages.
//!
//! Query types are built from loosely typed query-string values. Unknown
//! sort keys fall back to the default order instead of failing the request.

use std::cmp::Ordering;

use crate::models::WishlistEntry;

use super::{Category, Product};

/// Category filter value that matches everything.
pub const ALL_CATEGORIES: &str = "all";

/// Case-insensitive substring match; an empty needle matches everything.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn category_matches(product: &Product, category: &str) -> bool {
    category.is_empty()
        || category.eq_ignore_ascii_case(ALL_CATEGORIES)
        || product.in_category(category)
}

fn by_rating_desc(a: &Product, b: &Product) -> Ordering {
    b.rating.total_cmp(&a.rating)
}

// =============================================================================
// Products
// =============================================================================

/// Sort order of the product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    /// Catalog order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
}

impl ProductSort {
    pub const ALL: [Self; 4] = [Self::Featured, Self::PriceLow, Self::PriceHigh, Self::Rating];

    /// Parse a query-string value, falling back to [`ProductSort::Featured`].
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("price-low") => Self::PriceLow,
            Some("price-high") => Self::PriceHigh,
            Some("rating") => Self::Rating,
            _ => Self::Featured,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Highest Rated",
        }
    }

    /// Stable sort, so ties keep catalog order.
    pub(super) fn apply(self, products: &mut [&Product]) {
        match self {
            Self::Featured => {}
            Self::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Rating => products.sort_by(|a, b| by_rating_desc(a, b)),
        }
    }
}

/// Product listing filters.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Matched against name and description.
    pub search: String,
    /// Category name, or `all`.
    pub category: String,
    pub sort: ProductSort,
}

impl ProductQuery {
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let term = self.search.trim();
        let matches_search = contains_ignore_case(&product.name, term)
            || contains_ignore_case(&product.description, term);

        matches_search && category_matches(product, self.category.trim())
    }
}

// =============================================================================
// Categories
// =============================================================================

/// Category listing filters.
#[derive(Debug, Clone, Default)]
pub struct CategoryQuery {
    /// Matched against name and description.
    pub search: String,
    pub featured_only: bool,
}

impl CategoryQuery {
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        let term = self.search.trim();
        let matches_search = contains_ignore_case(&category.name, term)
            || contains_ignore_case(&category.description, term);

        matches_search && (!self.featured_only || category.featured)
    }
}

// =============================================================================
// Wishlist
// =============================================================================

/// Sort order of the wishlist page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WishlistSort {
    /// Most recently saved first.
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
    Rating,
}

impl WishlistSort {
    pub const ALL: [Self; 5] = [
        Self::Newest,
        Self::Oldest,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Rating,
    ];

    /// Parse a query-string value, falling back to [`WishlistSort::Newest`].
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("oldest") => Self::Oldest,
            Some("price-low") => Self::PriceLow,
            Some("price-high") => Self::PriceHigh,
            Some("rating") => Self::Rating,
            _ => Self::Newest,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Highest Rated",
        }
    }

    pub(super) fn apply(self, items: &mut [WishlistItem<'_>]) {
        match self {
            Self::Newest => items.sort_by(|a, b| b.entry.added_on.cmp(&a.entry.added_on)),
            Self::Oldest => items.sort_by(|a, b| a.entry.added_on.cmp(&b.entry.added_on)),
            Self::PriceLow => items.sort_by(|a, b| a.product.price.cmp(&b.product.price)),
            Self::PriceHigh => items.sort_by(|a, b| b.product.price.cmp(&a.product.price)),
            Self::Rating => items.sort_by(|a, b| by_rating_desc(a.product, b.product)),
        }
    }
}

/// Wishlist page filters.
#[derive(Debug, Clone, Default)]
pub struct WishlistQuery {
    /// Matched against product name and brand.
    pub search: String,
    /// Category name, or `all`.
    pub category: String,
    pub sort: WishlistSort,
}

impl WishlistQuery {
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let term = self.search.trim();
        let matches_search =
            contains_ignore_case(&product.name, term) || contains_ignore_case(&product.brand, term);

        matches_search && category_matches(product, self.category.trim())
    }
}

/// A wishlist entry joined with its product.
#[derive(Debug, Clone, Copy)]
pub struct WishlistItem<'a> {
    pub entry: &'a WishlistEntry,
    pub product: &'a Product,
}
