//! Session middleware configuration and visitor state accessors.
//!
//! Sessions live in process memory: they vanish on restart, which is all a
//! mocked storefront needs. Everything a visitor changes (cart, wishlist,
//! settings, cancellations, flash notices) is stored under the keys in
//! [`session_keys`].

use serde::{Serialize, de::DeserializeOwned};
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use lara_core::OrderId;

use crate::config::StorefrontConfig;
use crate::models::{AccountSettings, Cart, CurrentUser, Flash, Wishlist, session_keys};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "lara_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

type SessionResult<T> = Result<T, tower_sessions::session::Error>;

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

// =============================================================================
// Typed Accessors
// =============================================================================

async fn load_or_default<T>(session: &Session, key: &str) -> SessionResult<T>
where
    T: DeserializeOwned + Default,
{
    Ok(session.get::<T>(key).await?.unwrap_or_default())
}

async fn store<T: Serialize + Send + Sync>(
    session: &Session,
    key: &str,
    value: &T,
) -> SessionResult<()> {
    session.insert(key, value).await
}

/// The visitor's cart, empty if none was saved yet.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load_cart(session: &Session) -> SessionResult<Cart> {
    load_or_default(session, session_keys::CART).await
}

/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_cart(session: &Session, cart: &Cart) -> SessionResult<()> {
    store(session, session_keys::CART, cart).await
}

/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load_wishlist(session: &Session) -> SessionResult<Wishlist> {
    load_or_default(session, session_keys::WISHLIST).await
}

/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_wishlist(session: &Session, wishlist: &Wishlist) -> SessionResult<()> {
    store(session, session_keys::WISHLIST, wishlist).await
}

/// Saved settings, or defaults prefilled from `user`.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load_settings(session: &Session, user: &CurrentUser) -> SessionResult<AccountSettings> {
    Ok(session
        .get::<AccountSettings>(session_keys::ACCOUNT_SETTINGS)
        .await?
        .unwrap_or_else(|| AccountSettings::for_user(user)))
}

/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_settings(session: &Session, settings: &AccountSettings) -> SessionResult<()> {
    store(session, session_keys::ACCOUNT_SETTINGS, settings).await
}

/// Orders this visitor has cancelled.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load_cancelled_orders(session: &Session) -> SessionResult<Vec<OrderId>> {
    load_or_default(session, session_keys::CANCELLED_ORDERS).await
}

/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_cancelled_orders(session: &Session, ids: &[OrderId]) -> SessionResult<()> {
    store(session, session_keys::CANCELLED_ORDERS, &ids).await
}

/// Queue a notice for the next rendered page.
///
/// Failures are logged and swallowed; a lost notice never fails a request.
pub async fn set_flash(session: &Session, flash: Flash) {
    if let Err(e) = store(session, session_keys::FLASH, &flash).await {
        tracing::warn!("Failed to store flash message: {e}");
    }
}

/// Remove and return the queued notice, if any.
pub async fn take_flash(session: &Session) -> Option<Flash> {
    session
        .remove::<Flash>(session_keys::FLASH)
        .await
        .ok()
        .flatten()
}
