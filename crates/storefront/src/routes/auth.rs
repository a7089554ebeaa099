//! Authentication route handlers.
//!
//! Sign-in is mocked: any well-formed email with a non-empty password gets a
//! session, and the configured admin address gets the admin role.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use secrecy::SecretString;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::session::{load_wishlist, save_wishlist, set_flash};
use crate::middleware::{PageContext, clear_current_user, is_local_path, set_current_user};
use crate::models::{CurrentUser, Flash, Wishlist, session_keys};
use crate::services::{AuthError, Registration};
use crate::state::AppState;

/// Where visitors land after signing in without a `next` target.
const DEFAULT_AFTER_LOGIN: &str = "/dashboard";

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub next: Option<String>,
}

/// Registration form data.
#[derive(Deserialize)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

// =============================================================================
// Query Types
// =============================================================================

/// Query parameters for the login and register pages.
#[derive(Debug, Default, Deserialize)]
pub struct AuthPageQuery {
    pub error: Option<String>,
    pub next: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub page: PageContext,
    pub error: Option<&'static str>,
    pub next: String,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub page: PageContext,
    pub error: Option<&'static str>,
}

/// User-facing message for an `?error=` code.
#[must_use]
pub fn error_message(code: &str) -> &'static str {
    match code {
        "credentials" => "Invalid credentials. Please try again.",
        "invalid_email" => "Please enter a valid email address.",
        "missing_field" => "Please fill in all required fields.",
        "password_mismatch" => "Passwords do not match.",
        "password_too_short" => "Password must be at least 8 characters.",
        "email_taken" => "That email address is not available.",
        _ => "Something went wrong. Please try again.",
    }
}

/// The post-login destination, if it is a path on this site.
fn safe_next(next: Option<&str>) -> Option<&str> {
    next.map(str::trim).filter(|n| is_local_path(n))
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Store `user` in a fresh session and seed their wishlist.
async fn start_session(session: &Session, user: &CurrentUser) -> Result<()> {
    // New id on privilege change.
    session.cycle_id().await?;
    set_current_user(session, user).await?;

    let wishlist = load_wishlist(session).await?;
    if wishlist.is_empty() {
        save_wishlist(session, &Wishlist::starter()).await?;
    }

    set_sentry_user(&user.id, Some(user.email.as_str()));
    Ok(())
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(page: PageContext, Query(query): Query<AuthPageQuery>) -> Response {
    if page.is_authenticated() {
        return Redirect::to(DEFAULT_AFTER_LOGIN).into_response();
    }

    LoginTemplate {
        page,
        error: query.error.as_deref().map(error_message),
        next: safe_next(query.next.as_deref())
            .unwrap_or_default()
            .to_string(),
    }
    .into_response()
}

/// Handle login form submission.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let next = safe_next(form.next.as_deref()).map(String::from);
    let password = SecretString::from(form.password);

    let user = match state.auth().login(&form.email, &password) {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = %e, "Login failed");
            let mut target = format!("/auth/login?error={}", AuthError::InvalidCredentials.code());
            if let Some(next) = &next {
                target.push_str("&next=");
                target.push_str(&urlencoding::encode(next));
            }
            return Ok(Redirect::to(&target).into_response());
        }
    };

    start_session(&session, &user).await?;
    tracing::info!(user_id = %user.id, role = %user.role, "User logged in");
    set_flash(&session, Flash::success(format!("Welcome back, {}!", user.first_name))).await;

    Ok(Redirect::to(next.as_deref().unwrap_or(DEFAULT_AFTER_LOGIN)).into_response())
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
pub async fn register_page(page: PageContext, Query(query): Query<AuthPageQuery>) -> Response {
    if page.is_authenticated() {
        return Redirect::to(DEFAULT_AFTER_LOGIN).into_response();
    }

    RegisterTemplate {
        page,
        error: query.error.as_deref().map(error_message),
    }
    .into_response()
}

/// Handle registration form submission.
///
/// Registration is mocked: a valid form signs the new customer straight in.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    let password = SecretString::from(form.password);
    let password_confirm = SecretString::from(form.password_confirm);

    let registration = Registration {
        first_name: &form.first_name,
        last_name: &form.last_name,
        email: &form.email,
        password: &password,
        password_confirm: &password_confirm,
    };

    let user = match state.auth().register(&registration) {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = %e, "Registration failed");
            return Ok(Redirect::to(&format!("/auth/register?error={}", e.code())).into_response());
        }
    };

    start_session(&session, &user).await?;
    tracing::info!(user_id = %user.id, "Customer registered");
    set_flash(
        &session,
        Flash::success(format!("Welcome to Lara Parfume, {}!", user.first_name)),
    )
    .await;

    Ok(Redirect::to(DEFAULT_AFTER_LOGIN).into_response())
}

// =============================================================================
// Logout
// =============================================================================

/// Handle logout.
///
/// Clears the user and their account data; the cart stays with the visitor.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Response> {
    clear_current_user(&session).await?;
    for key in [
        session_keys::WISHLIST,
        session_keys::ACCOUNT_SETTINGS,
        session_keys::CANCELLED_ORDERS,
    ] {
        session.remove_value(key).await?;
    }
    clear_sentry_user();

    tracing::info!("User logged out");
    set_flash(&session, Flash::info("You have been signed out.")).await;
    Ok(Redirect::to("/").into_response())
}
