//! Customer dashboard route handlers.
//!
//! Everything here requires a signed-in user. Orders are the shop's sample
//! order history; cancellations, the wishlist and settings are kept in the
//! visitor's session.

use std::collections::BTreeMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use chrono::{NaiveDate, Utc};
use secrecy::SecretString;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use lara_core::{Email, OrderId, OrderStatus, Price, ProductId, Size};

use crate::catalog::{Category, WishlistQuery, WishlistSort};
use crate::content::{Activity, QuickAction};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::session::{
    load_cancelled_orders, load_cart, load_settings, load_wishlist, save_cancelled_orders,
    save_cart, save_settings as store_settings, save_wishlist, set_flash,
};
use crate::middleware::{OptionalAuth, PageContext, RequireAuth, set_current_user};
use crate::models::{
    AccountSettings, CurrentUser, Flash, NotificationSettings, PrivacySettings, Profile,
};
use crate::orders::{CancelError, Order, OrderQuery, OrderStats, StatusFilter};
use crate::services::{AuthError, PasswordChange};
use crate::state::AppState;

use super::cart::priced_line;
use super::products::ProductCard;
use super::{is_htmx, return_target};

/// Orders shown on the overview.
const RECENT_ORDERS: usize = 3;

/// Wishlist items shown on the overview.
const WISHLIST_PREVIEW: usize = 3;

// =============================================================================
// View Types
// =============================================================================

/// Headline numbers on the overview.
#[derive(Debug, Clone)]
pub struct OverviewStats {
    pub orders_placed: usize,
    pub total_spent: Price,
    pub wishlist_count: usize,
    pub cart_items: u32,
    pub cart_total: Price,
}

/// One bar of the monthly spending chart.
#[derive(Debug, Clone)]
pub struct SpendBar {
    pub month: String,
    pub amount: u32,
    /// Bar height relative to the largest month, 0..=100.
    pub percent: u32,
}

/// A saved product on the wishlist page.
#[derive(Debug, Clone)]
pub struct WishlistRow {
    pub product: ProductCard,
    pub added_on: NaiveDate,
}

fn spend_bars(state: &AppState) -> Vec<SpendBar> {
    let content = state.content();
    let max = content.max_monthly_spend().max(1);
    content
        .monthly_spending
        .iter()
        .map(|m| SpendBar {
            month: m.month.clone(),
            amount: m.amount,
            percent: m.amount * 100 / max,
        })
        .collect()
}

// =============================================================================
// Form and Query Types
// =============================================================================

/// Order list query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    pub status: Option<String>,
    pub search: Option<String>,
}

/// Wishlist query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct WishlistPageQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// Wishlist toggle/remove form data.
#[derive(Debug, Deserialize)]
pub struct WishlistForm {
    pub product_id: String,
    pub return_to: Option<String>,
}

/// Account settings form data. Unchecked switches are absent from the post.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub bio: String,
    pub email_marketing: Option<String>,
    pub order_updates: Option<String>,
    pub new_products: Option<String>,
    pub price_alerts: Option<String>,
    pub profile_visible: Option<String>,
    pub show_wishlist: Option<String>,
    pub show_orders: Option<String>,
}

impl SettingsForm {
    /// Validate the form into settings plus the parsed email.
    ///
    /// # Errors
    ///
    /// Returns the settings as submitted (so the form can be re-rendered)
    /// together with one message per invalid field.
    pub fn validate(
        self,
    ) -> std::result::Result<(AccountSettings, Email), (AccountSettings, Vec<String>)> {
        let mut errors = Vec::new();
        if self.first_name.trim().is_empty() {
            errors.push("First name is required.".to_string());
        }
        if self.last_name.trim().is_empty() {
            errors.push("Last name is required.".to_string());
        }
        let email = if self.email.trim().is_empty() {
            errors.push("Email is required.".to_string());
            None
        } else {
            match Email::parse(&self.email) {
                Ok(email) => Some(email),
                Err(e) => {
                    errors.push(format!("Email is invalid: {e}."));
                    None
                }
            }
        };

        let settings = AccountSettings {
            profile: Profile {
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                email: email
                    .as_ref()
                    .map_or_else(|| self.email.trim().to_string(), |e| e.as_str().to_string()),
                phone: self.phone.trim().to_string(),
                address: self.address.trim().to_string(),
                city: self.city.trim().to_string(),
                country: self.country.trim().to_string(),
                bio: self.bio.trim().to_string(),
            },
            notifications: NotificationSettings {
                email_marketing: self.email_marketing.is_some(),
                order_updates: self.order_updates.is_some(),
                new_products: self.new_products.is_some(),
                price_alerts: self.price_alerts.is_some(),
            },
            privacy: PrivacySettings {
                profile_visible: self.profile_visible.is_some(),
                show_wishlist: self.show_wishlist.is_some(),
                show_orders: self.show_orders.is_some(),
            },
        };

        match email {
            Some(email) if errors.is_empty() => Ok((settings, email)),
            _ => Err((settings, errors)),
        }
    }
}

/// Change password form data.
#[derive(Debug, Default, Deserialize)]
pub struct PasswordForm {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Field name to error message for the password form.
pub type PasswordErrors = BTreeMap<&'static str, String>;

impl PasswordForm {
    /// Check the form, with one message per invalid field.
    #[must_use]
    pub fn errors(self) -> PasswordErrors {
        let current = SecretString::from(self.current_password);
        let new = SecretString::from(self.new_password);
        let confirm = SecretString::from(self.confirm_password);

        PasswordChange {
            current: &current,
            new: &new,
            confirm: &confirm,
        }
        .errors()
        .into_iter()
        .map(|(field, e)| (field, password_message(&e)))
        .collect()
    }
}

fn password_message(error: &AuthError) -> String {
    match error {
        AuthError::MissingField(_) => "Current password is required.".to_string(),
        AuthError::PasswordMismatch => "New passwords do not match.".to_string(),
        AuthError::WeakPassword(reason) => format!("New {reason}."),
        other => format!("Password could not be changed: {other}."),
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Dashboard overview template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/overview.html")]
pub struct OverviewTemplate {
    pub page: PageContext,
    pub user: CurrentUser,
    pub stats: OverviewStats,
    pub recent_orders: Vec<Order>,
    pub wishlist_preview: Vec<ProductCard>,
    pub spending: Vec<SpendBar>,
    pub activity: Vec<Activity>,
    pub quick_actions: Vec<QuickAction>,
    pub active: &'static str,
}

/// Order history template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/orders.html")]
pub struct OrdersTemplate {
    pub page: PageContext,
    pub user: CurrentUser,
    pub orders: Vec<Order>,
    pub stats: OrderStats,
    pub statuses: [OrderStatus; 5],
    pub status: &'static str,
    pub search: String,
    pub active: &'static str,
}

/// Order detail template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/order_show.html")]
pub struct OrderShowTemplate {
    pub page: PageContext,
    pub user: CurrentUser,
    pub order: Order,
    pub active: &'static str,
}

/// Wishlist page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/wishlist.html")]
pub struct WishlistTemplate {
    pub page: PageContext,
    pub user: CurrentUser,
    pub items: Vec<WishlistRow>,
    pub saved_count: usize,
    pub categories: Vec<Category>,
    pub sorts: [WishlistSort; 5],
    pub search: String,
    pub category: String,
    pub sort: WishlistSort,
    pub active: &'static str,
}

/// Wishlist heart button fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/wishlist_button.html")]
pub struct WishlistButtonTemplate {
    pub product_id: ProductId,
    pub wishlisted: bool,
}

/// Account settings template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/settings.html")]
pub struct SettingsTemplate {
    pub page: PageContext,
    pub user: CurrentUser,
    pub settings: AccountSettings,
    pub errors: Vec<String>,
    pub password_errors: PasswordErrors,
    pub active: &'static str,
}

impl SettingsTemplate {
    /// Password form error for `field`, empty when it is valid.
    #[must_use]
    pub fn password_error(&self, field: &str) -> &str {
        self.password_errors.get(field).map_or("", String::as_str)
    }
}

// =============================================================================
// Overview
// =============================================================================

/// Display the dashboard overview.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn overview(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse> {
    let cancelled = load_cancelled_orders(&session).await?;
    let orders = state.orders().for_customer(&cancelled);
    let order_stats = OrderStats::from_orders(&orders);
    let wishlist = load_wishlist(&session).await?;
    let cart = load_cart(&session).await?;

    let preview: Vec<_> = state
        .catalog()
        .wishlist_items(&wishlist, &WishlistQuery::default())
        .into_iter()
        .take(WISHLIST_PREVIEW)
        .map(|item| ProductCard::new(item.product, &wishlist))
        .collect();

    Ok(OverviewTemplate {
        page,
        user,
        stats: OverviewStats {
            orders_placed: order_stats.total_orders,
            total_spent: order_stats.total_spent,
            wishlist_count: wishlist.len(),
            cart_items: cart.item_count(),
            cart_total: cart.total(),
        },
        recent_orders: orders.into_iter().take(RECENT_ORDERS).collect(),
        wishlist_preview: preview,
        spending: spend_bars(&state),
        activity: state.content().recent_activity.clone(),
        quick_actions: state.content().quick_actions.clone(),
        active: "overview",
    })
}

// =============================================================================
// Orders
// =============================================================================

/// Display the order history with status filter and search.
#[instrument(skip(state, session, page, user))]
pub async fn orders(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    RequireAuth(user): RequireAuth,
    Query(query): Query<OrdersQuery>,
) -> Result<impl IntoResponse> {
    let cancelled = load_cancelled_orders(&session).await?;
    let all = state.orders().for_customer(&cancelled);

    let query = OrderQuery {
        status: StatusFilter::parse(query.status.as_deref()),
        search: query.search.unwrap_or_default(),
    };
    let shown = query.apply(&all).into_iter().cloned().collect();

    Ok(OrdersTemplate {
        page,
        user,
        stats: OrderStats::from_orders(&all),
        orders: shown,
        statuses: OrderStatus::ALL,
        status: query.status.as_str(),
        search: query.search,
        active: "orders",
    })
}

/// Display one order.
#[instrument(skip(state, session, page, user))]
pub async fn order_show(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let cancelled = load_cancelled_orders(&session).await?;
    let order = state
        .orders()
        .for_customer(&cancelled)
        .into_iter()
        .find(|o| o.id.as_str() == id)
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(OrderShowTemplate {
        page,
        user,
        order,
        active: "orders",
    })
}

/// Cancel a pending or processing order.
#[instrument(skip(state, session, user))]
pub async fn cancel_order(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Response> {
    let order_id = OrderId::new(id);
    let mut cancelled = load_cancelled_orders(&session).await?;

    match state.orders().check_cancel(&order_id, &cancelled) {
        Ok(()) => {
            cancelled.push(order_id.clone());
            save_cancelled_orders(&session, &cancelled).await?;
            tracing::info!(user_id = %user.id, order_id = %order_id, "Order cancelled");
            set_flash(
                &session,
                Flash::success(format!("Order {order_id} has been cancelled.")),
            )
            .await;
        }
        Err(CancelError::NotFound) => {
            return Err(AppError::NotFound(format!("order {order_id}")));
        }
        Err(e @ CancelError::NotCancellable(_)) => {
            tracing::info!(order_id = %order_id, reason = %e, "Cancel rejected");
            set_flash(&session, Flash::error(format!("Order {order_id} cannot be cancelled: {e}."))).await;
        }
    }

    Ok(Redirect::to(&format!("/dashboard/orders/{order_id}")).into_response())
}

/// Add every item of an order back into the cart as 50ml bottles.
#[instrument(skip(state, session, user))]
pub async fn reorder(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Response> {
    let order = state
        .orders()
        .for_customer(&[])
        .into_iter()
        .find(|o| o.id.as_str() == id)
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    let mut cart = load_cart(&session).await?;
    let mut skipped = Vec::new();
    for item in &order.items {
        match priced_line(state.catalog(), &item.product_id, Some(Size::Ml50.as_str())) {
            Ok(line) => cart.add_item(line, item.quantity),
            Err(_) => skipped.push(item.name.clone()),
        }
    }
    save_cart(&session, &cart).await?;

    tracing::info!(user_id = %user.id, order_id = %order.id, skipped = skipped.len(), "Reordered");
    let flash = if skipped.is_empty() {
        Flash::success(format!("Items from order {} added to your cart.", order.id))
    } else {
        Flash::info(format!(
            "Items from order {} added to your cart, except: {}.",
            order.id,
            skipped.join(", ")
        ))
    };
    set_flash(&session, flash).await;

    Ok(Redirect::to("/cart").into_response())
}

// =============================================================================
// Wishlist
// =============================================================================

/// Display the wishlist with search, category filter and sort.
#[instrument(skip(state, session, page, user))]
pub async fn wishlist(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    RequireAuth(user): RequireAuth,
    Query(query): Query<WishlistPageQuery>,
) -> Result<impl IntoResponse> {
    let wishlist = load_wishlist(&session).await?;
    let query = WishlistQuery {
        search: query.search.unwrap_or_default(),
        category: query
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| crate::catalog::query::ALL_CATEGORIES.to_string()),
        sort: WishlistSort::parse(query.sort.as_deref()),
    };

    let items = state
        .catalog()
        .wishlist_items(&wishlist, &query)
        .into_iter()
        .map(|item| WishlistRow {
            product: ProductCard::new(item.product, &wishlist),
            added_on: item.entry.added_on,
        })
        .collect();

    Ok(WishlistTemplate {
        page,
        user,
        items,
        saved_count: wishlist.len(),
        categories: state.catalog().categories().to_vec(),
        sorts: WishlistSort::ALL,
        search: query.search,
        category: query.category,
        sort: query.sort,
        active: "wishlist",
    })
}

/// Save or unsave a product from a product card.
///
/// Anonymous visitors are sent to sign in first.
#[instrument(skip(state, session, headers, user))]
pub async fn toggle_wishlist(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    OptionalAuth(user): OptionalAuth,
    Form(form): Form<WishlistForm>,
) -> Result<Response> {
    let htmx = is_htmx(&headers);
    let product_id = ProductId::new(form.product_id);
    let back = return_target(form.return_to.as_deref(), "/dashboard/wishlist");

    let Some(user) = user else {
        let login = format!("/auth/login?next={}", urlencoding::encode(&back));
        if htmx {
            return Ok(AppendHeaders([("HX-Redirect", login)]).into_response());
        }
        return Ok(Redirect::to(&login).into_response());
    };

    let Some(product) = state.catalog().product(&product_id) else {
        return Err(AppError::NotFound(format!("product {product_id}")));
    };

    let mut wishlist = load_wishlist(&session).await?;
    let wishlisted = wishlist.toggle(product.id.clone(), Utc::now().date_naive());
    save_wishlist(&session, &wishlist).await?;
    tracing::info!(user_id = %user.id, product_id = %product_id, wishlisted, "Wishlist toggled");

    if htmx {
        return Ok(WishlistButtonTemplate {
            product_id,
            wishlisted,
        }
        .into_response());
    }

    let message = if wishlisted {
        format!("{} saved to your wishlist.", product.name)
    } else {
        format!("{} removed from your wishlist.", product.name)
    };
    set_flash(&session, Flash::success(message)).await;
    Ok(Redirect::to(&back).into_response())
}

/// Remove a product from the wishlist page.
#[instrument(skip(session, headers, user))]
pub async fn remove_from_wishlist(
    session: Session,
    headers: HeaderMap,
    RequireAuth(user): RequireAuth,
    Form(form): Form<WishlistForm>,
) -> Result<Response> {
    let product_id = ProductId::new(form.product_id);
    let mut wishlist = load_wishlist(&session).await?;

    if wishlist.remove(&product_id) {
        save_wishlist(&session, &wishlist).await?;
        tracing::info!(user_id = %user.id, product_id = %product_id, "Removed from wishlist");
    }

    if is_htmx(&headers) {
        // The row swaps itself out for the empty body.
        return Ok(StatusCode::OK.into_response());
    }

    set_flash(&session, Flash::info("Removed from your wishlist.")).await;
    Ok(Redirect::to("/dashboard/wishlist").into_response())
}

// =============================================================================
// Settings
// =============================================================================

/// Display account settings.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn settings(
    session: Session,
    page: PageContext,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse> {
    let settings = load_settings(&session, &user).await?;
    Ok(SettingsTemplate {
        page,
        user,
        settings,
        errors: Vec::new(),
        password_errors: PasswordErrors::new(),
        active: "settings",
    })
}

/// Save account settings.
///
/// Invalid profiles re-render the form with the submitted values and errors.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn save_settings(
    session: Session,
    page: PageContext,
    RequireAuth(user): RequireAuth,
    Form(form): Form<SettingsForm>,
) -> Result<Response> {
    let (settings, email) = match form.validate() {
        Ok(valid) => valid,
        Err((settings, errors)) => {
            return Ok(SettingsTemplate {
                page,
                user,
                settings,
                errors,
                password_errors: PasswordErrors::new(),
                active: "settings",
            }
            .into_response());
        }
    };

    let updated = CurrentUser {
        first_name: settings.profile.first_name.clone(),
        last_name: settings.profile.last_name.clone(),
        email,
        ..user
    };
    set_current_user(&session, &updated).await?;
    store_settings(&session, &settings).await?;

    tracing::info!("Account settings saved");
    set_flash(&session, Flash::success("Your settings have been saved.")).await;
    Ok(Redirect::to("/dashboard/settings").into_response())
}

/// Change the account password.
///
/// Nothing is stored; the form is only validated.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn change_password(
    session: Session,
    page: PageContext,
    RequireAuth(user): RequireAuth,
    Form(form): Form<PasswordForm>,
) -> Result<Response> {
    let password_errors = form.errors();
    if !password_errors.is_empty() {
        let settings = load_settings(&session, &user).await?;
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            SettingsTemplate {
                page,
                user,
                settings,
                errors: Vec::new(),
                password_errors,
                active: "settings",
            },
        )
            .into_response());
    }

    tracing::info!("Password changed");
    set_flash(&session, Flash::success("Your password has been updated.")).await;
    Ok(Redirect::to("/dashboard/settings").into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> SettingsForm {
        SettingsForm {
            first_name: " Sarah ".to_string(),
            last_name: "Johnson".to_string(),
            email: "Sarah.Johnson@Example.com".to_string(),
            city: "Jakarta".to_string(),
            order_updates: Some("on".to_string()),
            ..SettingsForm::default()
        }
    }

    #[test]
    fn test_settings_form_valid() {
        let (settings, email) = valid_form().validate().unwrap();

        assert_eq!(settings.profile.first_name, "Sarah");
        assert_eq!(settings.profile.city, "Jakarta");
        assert_eq!(settings.profile.email, email.as_str());
        assert!(settings.notifications.order_updates);
        assert!(!settings.notifications.email_marketing);
        assert!(!settings.privacy.profile_visible);
    }

    #[test]
    fn test_settings_form_reports_every_error() {
        let form = SettingsForm {
            first_name: String::new(),
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        let (settings, errors) = form.validate().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("First name")));
        assert!(errors.iter().any(|e| e.contains("Email is invalid")));
        assert_eq!(settings.profile.email, "not-an-email");
    }

    #[test]
    fn test_password_form_messages() {
        let form = PasswordForm {
            current_password: String::new(),
            new_password: "short".to_string(),
            confirm_password: "short".to_string(),
        };
        let errors = form.errors();
        assert_eq!(errors["current_password"], "Current password is required.");
        assert_eq!(
            errors["new_password"],
            "New password must be at least 8 characters."
        );

        let form = PasswordForm {
            current_password: "old-password".to_string(),
            new_password: "new-password".to_string(),
            confirm_password: "new-passw0rd".to_string(),
        };
        assert_eq!(
            form.errors().get("confirm_password").map(String::as_str),
            Some("New passwords do not match.")
        );
    }

    #[test]
    fn test_settings_form_requires_email() {
        let form = SettingsForm {
            email: "   ".to_string(),
            ..valid_form()
        };
        let (_, errors) = form.validate().unwrap_err();
        assert_eq!(errors, vec!["Email is required.".to_string()]);
    }
}
