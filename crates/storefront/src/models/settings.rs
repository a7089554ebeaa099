//! Account settings kept in the session.

use serde::{Deserialize, Serialize};

use super::CurrentUser;

/// Personal details shown on the settings page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub bio: String,
}

/// Email notification switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_marketing: bool,
    pub order_updates: bool,
    pub new_products: bool,
    pub price_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_marketing: true,
            order_updates: true,
            new_products: false,
            price_alerts: true,
        }
    }
}

/// Privacy switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub profile_visible: bool,
    pub show_wishlist: bool,
    pub show_orders: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_visible: true,
            show_wishlist: false,
            show_orders: false,
        }
    }
}

/// Everything on the settings page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSettings {
    pub profile: Profile,
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
}

impl AccountSettings {
    /// Default settings with the profile prefilled from the signed-in user.
    #[must_use]
    pub fn for_user(user: &CurrentUser) -> Self {
        Self {
            profile: Profile {
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
                email: user.email.to_string(),
                ..Profile::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lara_core::{Email, UserId, UserRole};

    #[test]
    fn test_for_user_prefills_profile() {
        let user = CurrentUser {
            id: UserId::generate(),
            email: Email::parse("emma.williams@lara.id").unwrap(),
            first_name: "Emma".to_string(),
            last_name: "Williams".to_string(),
            role: UserRole::Customer,
        };

        let settings = AccountSettings::for_user(&user);
        assert_eq!(settings.profile.first_name, "Emma");
        assert_eq!(settings.profile.email, "emma.williams@lara.id");
        assert!(settings.profile.phone.is_empty());
        assert!(settings.notifications.order_updates);
        assert!(!settings.notifications.new_products);
        assert!(settings.privacy.profile_visible);
        assert!(!settings.privacy.show_orders);
    }
}
