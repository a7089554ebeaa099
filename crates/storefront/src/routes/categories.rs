//! Category route handlers.

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

use crate::catalog::{Category, CategoryQuery};
use crate::error::Result;
use crate::filters;
use crate::middleware::PageContext;
use crate::middleware::session::load_wishlist;
use crate::state::AppState;

use super::NotFoundTemplate;
use super::products::ProductCard;

/// Category listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CategoriesQuery {
    pub search: Option<String>,
    /// Checkbox; present means "featured only".
    pub featured: Option<String>,
}

/// Category listing template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/index.html")]
pub struct CategoriesIndexTemplate {
    pub page: PageContext,
    pub categories: Vec<Category>,
    pub search: String,
    pub featured_only: bool,
}

/// Category detail template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/show.html")]
pub struct CategoryShowTemplate {
    pub page: PageContext,
    pub category: Category,
    pub products: Vec<ProductCard>,
}

/// Display categories, optionally searched and limited to featured ones.
#[instrument(skip(state, page))]
pub async fn index(
    State(state): State<AppState>,
    page: PageContext,
    Query(query): Query<CategoriesQuery>,
) -> impl IntoResponse {
    let query = CategoryQuery {
        search: query.search.unwrap_or_default(),
        featured_only: query.featured.is_some(),
    };

    CategoriesIndexTemplate {
        page,
        categories: state
            .catalog()
            .search_categories(&query)
            .into_iter()
            .cloned()
            .collect(),
        search: query.search,
        featured_only: query.featured_only,
    }
}

/// Display one category and its products.
#[instrument(skip(state, session, page))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    Path(id): Path<String>,
) -> Result<Response> {
    let Some(category) = state.catalog().category(&id) else {
        return Ok((
            StatusCode::NOT_FOUND,
            NotFoundTemplate {
                page,
                title: "Category Not Found".to_string(),
                message: "We couldn't find that fragrance family.".to_string(),
                back_href: "/categories".to_string(),
                back_label: "Browse all categories".to_string(),
            },
        )
            .into_response());
    };

    let wishlist = load_wishlist(&session).await?;
    let products = state.catalog().in_category(category);

    Ok(CategoryShowTemplate {
        page,
        products: ProductCard::many(&products, &wishlist),
        category: category.clone(),
    }
    .into_response())
}
