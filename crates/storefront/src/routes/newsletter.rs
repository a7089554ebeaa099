//! Newsletter subscription route handler.
//!
//! Subscriptions are acknowledged and logged; there is no mailing backend.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use lara_core::Email;

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub email: String,
}

/// Success fragment template (replaces the form via HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "newsletter/subscribe_success.html")]
pub struct SubscribeSuccessTemplate {
    pub email: String,
}

/// Error fragment template (replaces the form via HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "newsletter/subscribe_error.html")]
pub struct SubscribeErrorTemplate {
    pub message: String,
    pub email: String,
}

/// Subscribe to the newsletter (HTMX).
#[instrument(skip_all)]
pub async fn subscribe(Form(form): Form<SubscribeForm>) -> impl IntoResponse {
    match Email::parse(&form.email) {
        Ok(email) => {
            tracing::info!(domain = email.domain(), "Newsletter subscription");
            SubscribeSuccessTemplate {
                email: email.as_str().to_string(),
            }
            .into_response()
        }
        Err(e) => {
            tracing::info!(error = %e, "Newsletter subscription rejected");
            SubscribeErrorTemplate {
                message: "Please enter a valid email address.".to_string(),
                email: form.email.trim().to_string(),
            }
            .into_response()
        }
    }
}
