//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Mock sign-in and registration

pub mod auth;

pub use auth::{AuthError, AuthService, PasswordChange, Registration};
