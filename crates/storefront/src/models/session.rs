//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use lara_core::{Email, UserId, UserRole};

/// Session-stored user identity.
///
/// Created at sign-in and kept until logout or session expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Random ID assigned at sign-in.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Given name.
    pub first_name: String,
    /// Family name (may be empty).
    pub last_name: String,
    /// Admin or customer.
    pub role: UserRole,
}

impl CurrentUser {
    /// Whether the user may open the admin dashboard.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// "First Last", or just the first name when there is no last name.
    #[must_use]
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    /// Avatar initials ("SJ").
    #[must_use]
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Session keys for visitor state.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for storing the cart.
    pub const CART: &str = "cart";

    /// Key for storing the wishlist.
    pub const WISHLIST: &str = "wishlist";

    /// Key for storing account settings.
    pub const ACCOUNT_SETTINGS: &str = "account_settings";

    /// Key for the IDs of orders the customer cancelled.
    pub const CANCELLED_ORDERS: &str = "cancelled_orders";

    /// Key for the one-shot flash notice.
    pub const FLASH: &str = "flash";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str) -> CurrentUser {
        CurrentUser {
            id: UserId::generate(),
            email: Email::parse("sarah@lara.id").unwrap(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            role: UserRole::Customer,
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(user("Sarah", "Johnson").full_name(), "Sarah Johnson");
        assert_eq!(user("Sarah", "").full_name(), "Sarah");
    }

    #[test]
    fn test_initials() {
        assert_eq!(user("sarah", "johnson").initials(), "SJ");
        assert_eq!(user("Sarah", "").initials(), "S");
    }

    #[test]
    fn test_is_admin() {
        let mut u = user("Admin", "Lara");
        assert!(!u.is_admin());
        u.role = UserRole::Admin;
        assert!(u.is_admin());
    }
}
