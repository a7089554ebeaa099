//! Authentication service.
//!
//! Sign-in is mocked: there is no user store. Any well-formed email with a
//! non-blank password is accepted, and the role is decided by comparing the
//! address with the configured admin email.

mod error;

pub use error::AuthError;

use std::collections::BTreeMap;

use secrecy::{ExposeSecret, SecretString};

use lara_core::{Email, UserId, UserRole};

use crate::models::CurrentUser;

/// Minimum password length for new accounts.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Registration form input.
pub struct Registration<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a SecretString,
    pub password_confirm: &'a SecretString,
}

/// Password change form input.
pub struct PasswordChange<'a> {
    pub current: &'a SecretString,
    pub new: &'a SecretString,
    pub confirm: &'a SecretString,
}

impl PasswordChange<'_> {
    /// Check every field, keyed by form field name.
    ///
    /// There is no stored password to compare against, so any non-blank
    /// current password is accepted.
    #[must_use]
    pub fn errors(&self) -> BTreeMap<&'static str, AuthError> {
        let mut errors = BTreeMap::new();
        if self.current.expose_secret().trim().is_empty() {
            errors.insert(
                "current_password",
                AuthError::MissingField("current_password"),
            );
        }
        if let Err(e) = validate_password(self.new) {
            errors.insert("new_password", e);
        } else if self.new.expose_secret() != self.confirm.expose_secret() {
            errors.insert("confirm_password", AuthError::PasswordMismatch);
        }
        errors
    }
}

/// Authentication service.
pub struct AuthService<'a> {
    admin_email: &'a Email,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(admin_email: &'a Email) -> Self {
        Self { admin_email }
    }

    /// Role granted to an address.
    #[must_use]
    pub fn role_for(&self, email: &Email) -> UserRole {
        if self.admin_email.matches(email) {
            UserRole::Admin
        } else {
            UserRole::Customer
        }
    }

    /// Sign in with email and password.
    ///
    /// Names are derived from the email local part (`sarah.johnson@…`
    /// becomes "Sarah" "Johnson").
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid and
    /// `AuthError::InvalidCredentials` if the password is blank.
    pub fn login(&self, email: &str, password: &SecretString) -> Result<CurrentUser, AuthError> {
        let email = Email::parse(email)?;

        if password.expose_secret().trim().is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let role = self.role_for(&email);
        let (first_name, last_name) = match role {
            UserRole::Admin => ("Admin".to_string(), "Lara".to_string()),
            UserRole::Customer => names_from_email(&email),
        };

        Ok(CurrentUser {
            id: UserId::generate(),
            email,
            first_name,
            last_name,
            role,
        })
    }

    /// Create a customer account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` for blank names,
    /// `AuthError::InvalidEmail` for a malformed address,
    /// `AuthError::WeakPassword` or `AuthError::PasswordMismatch` for bad
    /// passwords and `AuthError::EmailUnavailable` for the admin address.
    pub fn register(&self, form: &Registration<'_>) -> Result<CurrentUser, AuthError> {
        let first_name = form.first_name.trim();
        let last_name = form.last_name.trim();
        if first_name.is_empty() {
            return Err(AuthError::MissingField("first_name"));
        }
        if last_name.is_empty() {
            return Err(AuthError::MissingField("last_name"));
        }

        let email = Email::parse(form.email)?;
        if self.role_for(&email) == UserRole::Admin {
            return Err(AuthError::EmailUnavailable);
        }

        validate_password(form.password)?;
        if form.password.expose_secret() != form.password_confirm.expose_secret() {
            return Err(AuthError::PasswordMismatch);
        }

        Ok(CurrentUser {
            id: UserId::generate(),
            email,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role: UserRole::Customer,
        })
    }
}

/// Validate password meets requirements.
fn validate_password(password: &SecretString) -> Result<(), AuthError> {
    if password.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Split `first.last` style local parts into capitalized names.
fn names_from_email(email: &Email) -> (String, String) {
    let mut words = email
        .local_part()
        .split(['.', '_', '-', '+'])
        .filter(|w| !w.is_empty())
        .map(capitalize);

    let first = words.next().unwrap_or_default();
    let last = words.collect::<Vec<_>>().join(" ");
    (first, last)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |c| {
        c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}
