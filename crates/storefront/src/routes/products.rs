//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use lara_core::{Price, ProductId, Size};

use crate::catalog::{Category, Product, ProductQuery, ProductSort, ScentNotes, SizePrice};
use crate::error::Result;
use crate::filters;
use crate::middleware::PageContext;
use crate::middleware::session::load_wishlist;
use crate::models::{MAX_QUANTITY, Wishlist};
use crate::state::AppState;

use super::NotFoundTemplate;

/// Most related products shown under a product.
const RELATED_LIMIT: usize = 4;

// =============================================================================
// View Types
// =============================================================================

/// Product card display data for templates.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub image: String,
    pub price: Price,
    pub original_price: Option<Price>,
    pub rating: f32,
    pub reviews: u32,
    pub is_new: bool,
    pub is_sale: bool,
    pub in_stock: bool,
    pub wishlisted: bool,
}

impl ProductCard {
    #[must_use]
    pub fn new(product: &Product, wishlist: &Wishlist) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            price: product.price,
            original_price: product.original_price,
            rating: product.rating,
            reviews: product.reviews,
            is_new: product.is_new,
            is_sale: product.is_sale,
            in_stock: product.in_stock(),
            wishlisted: wishlist.contains(&product.id),
        }
    }

    /// Cards for a list of products.
    #[must_use]
    pub fn many(products: &[&Product], wishlist: &Wishlist) -> Vec<Self> {
        products.iter().map(|p| Self::new(p, wishlist)).collect()
    }
}

/// Product detail display data for templates.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub image: String,
    pub gallery: Vec<String>,
    pub price: Price,
    pub original_price: Option<Price>,
    pub rating: f32,
    pub reviews: u32,
    pub description: String,
    pub long_description: String,
    pub sizes: Vec<SizePrice>,
    /// Size preselected in the size picker.
    pub default_size: Size,
    pub notes: ScentNotes,
    pub ingredients: String,
    pub concentration: String,
    pub longevity: String,
    pub sillage: String,
    pub stock: u32,
    pub is_new: bool,
    pub is_sale: bool,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            gallery: product.gallery.clone(),
            price: product.price,
            original_price: product.original_price,
            rating: product.rating,
            reviews: product.reviews,
            description: product.description.clone(),
            long_description: product.long_description.clone(),
            sizes: product.sizes.clone(),
            default_size: Size::default(),
            notes: product.notes.clone(),
            ingredients: product.ingredients.clone(),
            concentration: product.concentration.clone(),
            longevity: product.longevity.clone(),
            sillage: product.sillage.clone(),
            stock: product.stock,
            is_new: product.is_new,
            is_sale: product.is_sale,
        }
    }
}

impl ProductDetail {
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Query Types
// =============================================================================

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

impl ProductsQuery {
    fn into_query(self) -> ProductQuery {
        ProductQuery {
            search: self.search.unwrap_or_default(),
            category: self
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| crate::catalog::query::ALL_CATEGORIES.to_string()),
            sort: ProductSort::parse(self.sort.as_deref()),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub page: PageContext,
    pub products: Vec<ProductCard>,
    pub categories: Vec<Category>,
    pub sorts: [ProductSort; 4],
    pub search: String,
    pub category: String,
    pub sort: ProductSort,
    pub total: usize,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub page: PageContext,
    pub product: ProductDetail,
    pub related: Vec<ProductCard>,
    pub wishlisted: bool,
    pub max_quantity: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the product listing with search, category filter and sort.
#[instrument(skip(state, session, page))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    Query(query): Query<ProductsQuery>,
) -> Result<impl IntoResponse> {
    let query = query.into_query();
    let wishlist = load_wishlist(&session).await?;
    let found = state.catalog().search(&query);

    Ok(ProductsIndexTemplate {
        page,
        total: found.len(),
        products: ProductCard::many(&found, &wishlist),
        categories: state.catalog().categories().to_vec(),
        sorts: ProductSort::ALL,
        search: query.search,
        category: query.category,
        sort: query.sort,
    })
}

/// Display a product detail page.
#[instrument(skip(state, session, page))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    Path(id): Path<String>,
) -> Result<Response> {
    let Some(product) = state.catalog().product(&ProductId::new(id)) else {
        return Ok((
            StatusCode::NOT_FOUND,
            NotFoundTemplate {
                page,
                title: "Product Not Found".to_string(),
                message: "The fragrance you're looking for doesn't exist or is no longer available."
                    .to_string(),
                back_href: "/products".to_string(),
                back_label: "Browse all fragrances".to_string(),
            },
        )
            .into_response());
    };

    let wishlist = load_wishlist(&session).await?;
    let related = state.catalog().related(product, RELATED_LIMIT);

    Ok(ProductShowTemplate {
        page,
        wishlisted: wishlist.contains(&product.id),
        related: ProductCard::many(&related, &wishlist),
        product: ProductDetail::from(product),
        max_quantity: MAX_QUANTITY,
    }
    .into_response())
}
