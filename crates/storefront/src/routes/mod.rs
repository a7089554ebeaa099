//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /about                  - About page
//!
//! # Catalog
//! GET  /products               - Product listing (?search, ?category, ?sort)
//! GET  /products/{id}          - Product detail
//! GET  /categories             - Category listing (?search, ?featured)
//! GET  /categories/{id}        - Category detail
//!
//! # Cart (HTMX fragments or redirect with a flash notice)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (badge fragment, triggers cart-updated)
//! POST /cart/update            - Update quantity (cart items fragment)
//! POST /cart/remove            - Remove line (cart items fragment)
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Auth (form posts are rate limited)
//! GET  /auth/login             - Login page (?next, ?error)
//! POST /auth/login             - Login action
//! GET  /auth/register          - Register page
//! POST /auth/register          - Register action
//! POST /auth/logout            - Logout action
//!
//! # Dashboard (requires auth)
//! GET  /dashboard                      - Overview
//! GET  /dashboard/orders               - Order history (?status, ?search)
//! GET  /dashboard/orders/{id}          - Order detail
//! POST /dashboard/orders/{id}/cancel   - Cancel a pending or processing order
//! POST /dashboard/orders/{id}/reorder  - Add the order's items to the cart
//! GET  /dashboard/wishlist             - Wishlist (?search, ?category, ?sort)
//! POST /dashboard/wishlist/toggle      - Save or unsave a product
//! POST /dashboard/wishlist/remove      - Remove a saved product
//! GET  /dashboard/settings             - Account settings
//! POST /dashboard/settings             - Save account settings
//! POST /dashboard/settings/password    - Change password
//!
//! # Admin (requires admin)
//! GET  /admin                  - Admin dashboard
//!
//! # Contact & newsletter
//! GET  /contact                - Contact form
//! POST /contact                - Submit contact form
//! POST /newsletter/subscribe   - Subscribe (fragment)
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod categories;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod newsletter;
pub mod pages;
pub mod products;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};

use crate::filters;
use crate::middleware::{PageContext, auth_rate_limiter, is_local_path};
use crate::state::AppState;

/// Header HTMX sets on every request it issues.
pub const HX_REQUEST: &str = "hx-request";

/// Whether the request came from HTMX rather than a plain form post.
#[must_use]
pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// Where to send the visitor after a plain form post.
///
/// Only same-site paths are honored; anything else falls back to `fallback`.
#[must_use]
pub fn return_target(return_to: Option<&str>, fallback: &str) -> String {
    return_to
        .map(str::trim)
        .filter(|path| is_local_path(path))
        .unwrap_or(fallback)
        .to_string()
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub page: PageContext,
    pub title: String,
    pub message: String,
    pub back_href: String,
    pub back_label: String,
}

/// Fallback for unknown paths.
pub async fn not_found(page: PageContext) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            page,
            title: "Page Not Found".to_string(),
            message: "The page you're looking for doesn't exist.".to_string(),
            back_href: "/".to_string(),
            back_label: "Back to home".to_string(),
        },
    )
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index))
        .route("/{id}", get(categories::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    let limited = Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route_layer(auth_rate_limiter());

    Router::new()
        .route("/login", get(auth::login_page))
        .route("/register", get(auth::register_page))
        .route("/logout", post(auth::logout))
        .merge(limited)
}

/// Create the customer dashboard routes router.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::overview))
        .route("/orders", get(dashboard::orders))
        .route("/orders/{id}", get(dashboard::order_show))
        .route("/orders/{id}/cancel", post(dashboard::cancel_order))
        .route("/orders/{id}/reorder", post(dashboard::reorder))
        .route("/wishlist", get(dashboard::wishlist))
        .route("/wishlist/toggle", post(dashboard::toggle_wishlist))
        .route("/wishlist/remove", post(dashboard::remove_from_wishlist))
        .route(
            "/settings",
            get(dashboard::settings).post(dashboard::save_settings),
        )
        .route("/settings/password", post(dashboard::change_password))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/about", get(pages::about))
        .route("/contact", get(contact::show).post(contact::submit))
        .route("/newsletter/subscribe", post(newsletter::subscribe))
        .route("/admin", get(admin::dashboard))
        .nest("/products", product_routes())
        .nest("/categories", category_routes())
        .nest("/cart", cart_routes())
        .nest("/auth", auth_routes())
        .nest("/dashboard", dashboard_routes())
        .fallback(not_found)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use axum::http::HeaderValue;

    #[test]
    fn test_is_htmx() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));

        headers.insert(HX_REQUEST, HeaderValue::from_static("true"));
        assert!(is_htmx(&headers));
    }

    #[test]
    fn test_return_target_only_follows_local_paths() {
        assert_eq!(return_target(Some("/products/3"), "/cart"), "/products/3");
        assert_eq!(return_target(Some("https://evil.example"), "/cart"), "/cart");
        assert_eq!(return_target(Some("//evil.example"), "/cart"), "/cart");
        assert_eq!(return_target(None, "/cart"), "/cart");
    }
}
