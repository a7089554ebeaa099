//! Per-request data every full page needs.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::models::{CurrentUser, Flash, session_keys};

use super::session::{load_cart, take_flash};

/// Header data for the base layout: who is signed in, the cart badge and
/// any pending flash notice.
///
/// Extracting this consumes the flash notice, so only full-page handlers
/// should ask for it.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub user: Option<CurrentUser>,
    pub cart_count: u32,
    pub flash: Option<Flash>,
}

impl PageContext {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(CurrentUser::is_admin)
    }

    /// Avatar initials, empty for anonymous visitors.
    #[must_use]
    pub fn initials(&self) -> String {
        self.user.as_ref().map(CurrentUser::initials).unwrap_or_default()
    }

    /// Signed-in user's first name, empty for anonymous visitors.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.first_name.as_str())
    }
}

impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(session) = parts.extensions.get::<Session>() else {
            return Ok(Self::default());
        };

        let user = session
            .get::<CurrentUser>(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten();
        let cart_count = load_cart(session)
            .await
            .map(|cart| cart.item_count())
            .unwrap_or_default();
        let flash = take_flash(session).await;

        Ok(Self {
            user,
            cart_count,
            flash,
        })
    }
}
