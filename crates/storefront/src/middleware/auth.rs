//! Authentication middleware and extractors.
//!
//! Provides extractors for requiring a signed-in user (or an admin) in route
//! handlers, plus helpers for storing the user in the session.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};

/// Where anonymous visitors are sent.
pub const LOGIN_PATH: &str = "/auth/login";

/// Extractor that requires a signed-in user.
///
/// If the visitor is not logged in, redirects to the login page with the
/// requested path in `next`.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.first_name)
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

/// Extractor that requires a signed-in admin.
///
/// Customers and anonymous visitors are sent to the login page.
pub struct RequireAdmin(pub CurrentUser);

/// Error returned when authentication is required but the visitor is not logged in.
#[derive(Debug)]
pub enum AuthRejection {
    /// Redirect to login page, optionally returning to `next` afterwards.
    RedirectToLogin { next: Option<String> },
    /// Session layer missing from the request.
    Unauthorized,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin { next: Some(next) } => Redirect::to(&format!(
                "{LOGIN_PATH}?next={}",
                urlencoding::encode(&next)
            ))
            .into_response(),
            Self::RedirectToLogin { next: None } => Redirect::to(LOGIN_PATH).into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

/// Read the signed-in user from the request's session.
async fn current_user(parts: &Parts) -> Result<Option<CurrentUser>, AuthRejection> {
    // Get the session from extensions (set by SessionManagerLayer)
    let session = parts
        .extensions
        .get::<Session>()
        .ok_or(AuthRejection::Unauthorized)?;

    Ok(session
        .get::<CurrentUser>(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten())
}

/// Path and query the visitor asked for.
///
/// Nested routers see the URI with their prefix stripped, so the original
/// URI is preferred when the router recorded it.
fn requested_path(parts: &Parts) -> Option<String> {
    parts
        .extensions
        .get::<OriginalUri>()
        .map_or(&parts.uri, |OriginalUri(uri)| uri)
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let next = requested_path(parts);

        current_user(parts)
            .await?
            .map(Self)
            .ok_or(AuthRejection::RedirectToLogin { next })
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match current_user(parts).await? {
            Some(user) if user.is_admin() => Ok(Self(user)),
            Some(user) => {
                tracing::warn!(user_id = %user.id, "Non-admin denied admin access");
                Err(AuthRejection::RedirectToLogin { next: None })
            }
            None => Err(AuthRejection::RedirectToLogin { next: None }),
        }
    }
}

/// Extractor that optionally gets the current user.
///
/// Unlike `RequireAuth`, this does not reject the request if the visitor is not logged in.
pub struct OptionalAuth(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(current_user(parts).await.ok().flatten()))
    }
}

/// Helper to set the current user in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to clear the current user from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await?;
    Ok(())
}

/// Whether `next` is a safe post-login destination on this site.
#[must_use]
pub fn is_local_path(next: &str) -> bool {
    next.starts_with('/') && !next.starts_with("//") && !next.contains('\\')
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_is_local_path() {
        assert!(is_local_path("/dashboard/orders"));
        assert!(is_local_path("/products?category=floral"));
        assert!(!is_local_path("//evil.example"));
        assert!(!is_local_path("https://evil.example"));
        assert!(!is_local_path("/\\evil.example"));
        assert!(!is_local_path(""));
    }

    #[test]
    fn test_requested_path_prefers_original_uri() {
        let (mut parts, ()) = axum::http::Request::builder()
            .uri("/orders?status=shipped")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(
            requested_path(&parts).as_deref(),
            Some("/orders?status=shipped")
        );

        parts.extensions.insert(OriginalUri(
            "/dashboard/orders?status=shipped".parse().unwrap(),
        ));
        assert_eq!(
            requested_path(&parts).as_deref(),
            Some("/dashboard/orders?status=shipped")
        );
    }

    #[test]
    fn test_redirect_carries_next() {
        let response = AuthRejection::RedirectToLogin {
            next: Some("/dashboard/orders?status=shipped".to_string()),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()["location"].to_str().unwrap_or_default();
        assert_eq!(
            location,
            "/auth/login?next=%2Fdashboard%2Forders%3Fstatus%3Dshipped"
        );
    }
}
