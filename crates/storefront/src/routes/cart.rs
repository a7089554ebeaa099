//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Plain form posts fall back to a redirect with a flash notice. The cart
//! itself lives in the session; prices always come from the catalog.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use lara_core::{Price, ProductId, Size};

use crate::catalog::Catalog;
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::PageContext;
use crate::middleware::session::{load_cart, save_cart, set_flash};
use crate::models::{Cart, Flash, MAX_QUANTITY, NewCartLine};
use crate::state::AppState;

use super::{is_htmx, return_target};

/// Event HTMX listeners use to refresh the cart badge.
pub const CART_UPDATED_TRIGGER: (&str, &str) = ("HX-Trigger", "cart-updated");

/// Asks HTMX to reload the current page.
const HX_REFRESH: (&str, &str) = ("HX-Refresh", "true");

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub size: Option<String>,
    pub quantity: Option<u32>,
    pub return_to: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub size: String,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
    pub size: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub page: PageContext,
    pub cart: Cart,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: Cart,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Cart Rules
// =============================================================================

/// Why an item could not be added.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddRejection {
    #[error("That fragrance could not be found.")]
    UnknownProduct,
    #[error("{0} is currently out of stock.")]
    OutOfStock(String),
    #[error("Please choose a valid bottle size.")]
    UnknownSize,
}

/// Build a cart line for `product_id` in `size`, priced from the catalog.
///
/// # Errors
///
/// Rejects unknown products, products with no stock and sizes the product
/// is not sold in.
pub fn priced_line(
    catalog: &Catalog,
    product_id: &ProductId,
    size: Option<&str>,
) -> std::result::Result<NewCartLine, AddRejection> {
    let product = catalog
        .product(product_id)
        .ok_or(AddRejection::UnknownProduct)?;

    if !product.in_stock() {
        return Err(AddRejection::OutOfStock(product.name.clone()));
    }

    let size = match size.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw.parse::<Size>().map_err(|_| AddRejection::UnknownSize)?,
        None => Size::default(),
    };
    let price: Price = product.price_for(size).ok_or(AddRejection::UnknownSize)?;

    Ok(NewCartLine {
        product_id: product.id.clone(),
        name: product.name.clone(),
        price,
        image: product.image.clone(),
        size,
    })
}

/// Clamp a submitted quantity into the selectable range.
#[must_use]
pub fn clamp_quantity(quantity: Option<u32>) -> u32 {
    quantity.unwrap_or(1).clamp(1, MAX_QUANTITY)
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(session, page))]
pub async fn show(session: Session, page: PageContext) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;
    Ok(CartShowTemplate { page, cart })
}

/// Add item to cart.
///
/// HTMX callers get the new badge and a `cart-updated` trigger; plain posts
/// are redirected back with a notice.
#[instrument(skip(state, session, headers))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let htmx = is_htmx(&headers);
    let back = return_target(form.return_to.as_deref(), "/cart");
    let product_id = ProductId::new(form.product_id);

    let line = match priced_line(state.catalog(), &product_id, form.size.as_deref()) {
        Ok(line) => line,
        Err(rejection) => {
            tracing::info!(product_id = %product_id, reason = %rejection, "Add to cart rejected");
            set_flash(&session, Flash::error(rejection.to_string())).await;
            if htmx {
                // Reload so the notice renders in the page header.
                return Ok(AppendHeaders([HX_REFRESH]).into_response());
            }
            return Ok(Redirect::to(&back).into_response());
        }
    };

    let quantity = clamp_quantity(form.quantity);
    let name = line.name.clone();
    let size = line.size;

    let mut cart = load_cart(&session).await?;
    cart.add_item(line, quantity);
    save_cart(&session, &cart).await?;

    tracing::info!(product_id = %product_id, %size, quantity, "Added to cart");
    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product_id", product_id.as_str()), ("size", size.as_str())]),
    );

    if htmx {
        return Ok((
            AppendHeaders([CART_UPDATED_TRIGGER]),
            CartCountTemplate {
                count: cart.item_count(),
            },
        )
            .into_response());
    }

    set_flash(&session, Flash::success(format!("{name} ({size}) added to your cart."))).await;
    Ok(Redirect::to(&back).into_response())
}

/// Update cart item quantity. A quantity of zero removes the line.
#[instrument(skip(session, headers))]
pub async fn update(
    session: Session,
    headers: HeaderMap,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let mut cart = load_cart(&session).await?;

    if let Ok(size) = form.size.parse::<Size>() {
        let product_id = ProductId::new(form.product_id);
        let quantity = form.quantity.min(MAX_QUANTITY);
        if cart.update_quantity(&product_id, size, quantity) {
            save_cart(&session, &cart).await?;
            tracing::info!(product_id = %product_id, %size, quantity, "Cart quantity updated");
        }
    }

    Ok(cart_changed(&headers, cart))
}

/// Remove a line from the cart.
#[instrument(skip(session, headers))]
pub async fn remove(
    session: Session,
    headers: HeaderMap,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let mut cart = load_cart(&session).await?;

    if let Ok(size) = form.size.parse::<Size>() {
        let product_id = ProductId::new(form.product_id);
        if cart.remove_item(&product_id, size) {
            save_cart(&session, &cart).await?;
            tracing::info!(product_id = %product_id, %size, "Removed from cart");
            if !is_htmx(&headers) {
                set_flash(&session, Flash::info("Item removed from your cart.")).await;
            }
        }
    }

    Ok(cart_changed(&headers, cart))
}

/// Empty the cart.
#[instrument(skip(session, headers))]
pub async fn clear(session: Session, headers: HeaderMap) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    cart.clear();
    save_cart(&session, &cart).await?;
    tracing::info!("Cart cleared");

    if !is_htmx(&headers) {
        set_flash(&session, Flash::info("Your cart is now empty.")).await;
    }
    Ok(cart_changed(&headers, cart))
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;
    Ok(CartCountTemplate {
        count: cart.item_count(),
    })
}

/// Respond to a cart mutation: the items fragment for HTMX, the cart page otherwise.
fn cart_changed(headers: &HeaderMap, cart: Cart) -> Response {
    if is_htmx(headers) {
        (AppendHeaders([CART_UPDATED_TRIGGER]), CartItemsTemplate { cart }).into_response()
    } else {
        Redirect::to("/cart").into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_priced_line_uses_catalog_price_for_size() {
        let catalog = Catalog::seeded();
        let line = priced_line(&catalog, &ProductId::new("1"), Some("100ml")).unwrap();

        assert_eq!(line.name, "Midnight Rose");
        assert_eq!(line.size, Size::Ml100);
        assert_eq!(line.price, Price::from_cents(18999));
    }

    #[test]
    fn test_priced_line_defaults_to_50ml() {
        let catalog = Catalog::seeded();
        let line = priced_line(&catalog, &ProductId::new("2"), None).unwrap();

        assert_eq!(line.size, Size::Ml50);
        assert_eq!(line.price, Price::from_cents(8999));
    }

    #[test]
    fn test_priced_line_rejections() {
        let catalog = Catalog::seeded();

        assert_eq!(
            priced_line(&catalog, &ProductId::new("99"), None),
            Err(AddRejection::UnknownProduct)
        );
        assert_eq!(
            priced_line(&catalog, &ProductId::new("8"), None),
            Err(AddRejection::OutOfStock("Jasmine Noir".to_string()))
        );
        assert_eq!(
            priced_line(&catalog, &ProductId::new("3"), Some("75ml")),
            Err(AddRejection::UnknownSize)
        );
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(None), 1);
        assert_eq!(clamp_quantity(Some(0)), 1);
        assert_eq!(clamp_quantity(Some(4)), 4);
        assert_eq!(clamp_quantity(Some(50)), MAX_QUANTITY);
    }
}
