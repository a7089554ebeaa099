//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::Category;
use crate::content::{HeroSlide, Testimonial};
use crate::error::Result;
use crate::filters;
use crate::middleware::PageContext;
use crate::middleware::session::load_wishlist;
use crate::state::AppState;

use super::products::ProductCard;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
    /// Hero carousel slides; the first one is shown without JavaScript.
    pub hero_slides: Vec<HeroSlide>,
    pub featured: Vec<ProductCard>,
    /// Category showcase tiles.
    pub categories: Vec<Category>,
    pub testimonials: Vec<Testimonial>,
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
) -> Result<impl IntoResponse> {
    let wishlist = load_wishlist(&session).await?;
    let catalog = state.catalog();

    Ok(HomeTemplate {
        page,
        hero_slides: state.content().hero_slides.clone(),
        featured: ProductCard::many(&catalog.featured(), &wishlist),
        categories: catalog
            .showcase_categories()
            .into_iter()
            .cloned()
            .collect(),
        testimonials: state.content().testimonials.clone(),
    })
}
