//! Contact form route handlers.
//!
//! Submissions are validated and logged. Invalid submissions re-render the
//! form with per-field errors and the values the visitor typed.

use std::collections::BTreeMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use lara_core::Email;

use crate::filters;
use crate::middleware::PageContext;

/// Subjects offered in the contact form, as `(value, label)`.
pub const SUBJECTS: [(&str, &str); 6] = [
    ("product", "Product Inquiry"),
    ("order", "Order Status"),
    ("custom", "Custom Fragrance"),
    ("partnership", "Partnership"),
    ("complaint", "Complaint"),
    ("other", "Other"),
];

/// Contact form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Field name to error message.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

impl ContactForm {
    /// Check every field, collecting all problems.
    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required.");
        }
        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required.");
        } else if Email::parse(&self.email).is_err() {
            errors.insert("email", "Please enter a valid email address.");
        }
        if !SUBJECTS.iter().any(|(value, _)| *value == self.subject) {
            errors.insert("subject", "Please choose a subject.");
        }
        if self.message.trim().is_empty() {
            errors.insert("message", "Message is required.");
        }
        errors
    }
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: PageContext,
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub subjects: [(&'static str, &'static str); 6],
    pub sent: bool,
}

impl ContactTemplate {
    /// Error for `field`, empty when it is valid.
    #[must_use]
    pub fn error_for(&self, field: &str) -> &'static str {
        self.errors.get(field).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_subject(&self, value: &str) -> bool {
        self.form.subject == value
    }
}

/// Display the contact form.
pub async fn show(page: PageContext) -> impl IntoResponse {
    ContactTemplate {
        page,
        form: ContactForm::default(),
        errors: FieldErrors::new(),
        subjects: SUBJECTS,
        sent: false,
    }
}

/// Handle a contact form submission.
#[instrument(skip_all, fields(subject = %form.subject))]
pub async fn submit(page: PageContext, Form(form): Form<ContactForm>) -> impl IntoResponse {
    let errors = form.errors();
    if !errors.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactTemplate {
                page,
                form,
                errors,
                subjects: SUBJECTS,
                sent: false,
            },
        );
    }

    tracing::info!(
        subject = %form.subject,
        has_phone = !form.phone.trim().is_empty(),
        "Contact form submitted"
    );

    (
        StatusCode::OK,
        ContactTemplate {
            page,
            form: ContactForm::default(),
            errors: FieldErrors::new(),
            subjects: SUBJECTS,
            sent: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            phone: String::new(),
            subject: "custom".to_string(),
            message: "Can you blend a rose and oud scent?".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(filled().errors().is_empty());
    }

    #[test]
    fn test_phone_is_optional() {
        let form = ContactForm {
            phone: "+62 812 0000 0000".to_string(),
            ..filled()
        };
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_all_errors_reported() {
        let errors = ContactForm::default().errors();
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec!["email", "message", "name", "subject"]
        );
    }

    #[test]
    fn test_bad_email_and_subject() {
        let form = ContactForm {
            email: "sarah@".to_string(),
            subject: "spam".to_string(),
            ..filled()
        };
        let errors = form.errors();
        assert_eq!(errors.get("email"), Some(&"Please enter a valid email address."));
        assert_eq!(errors.get("subject"), Some(&"Please choose a subject."));
    }
}
