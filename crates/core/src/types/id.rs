//! Newtype IDs for type-safe entity references.
//!
//! Catalog records use short string identifiers (`"1"`, `"ORD-001"`,
//! `"floral"`), so the `define_id!` macro wraps a `String`. Users get a
//! random UUID at sign-in.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a string-backed ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `new()` and `as_str()`
/// - `Display`, `From<&str>`, `From<String>` and `AsRef<str>`
///
/// # Example
///
/// ```rust
/// # use lara_core::define_id;
/// define_id!(ReviewId);
/// define_id!(CouponId);
///
/// let review = ReviewId::new("r-1");
/// let coupon = CouponId::new("r-1");
///
/// assert_eq!(review.as_str(), coupon.as_str());
/// // Different types, so this won't compile:
/// // let _: ReviewId = coupon;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(OrderId);
define_id!(CategoryId);

/// Identifier assigned to a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random user ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_string_id_display_and_eq() {
        let id = ProductId::new("3");
        assert_eq!(id.to_string(), "3");
        assert_eq!(id, ProductId::from("3"));
        assert_ne!(id, ProductId::from("4"));
    }

    #[test]
    fn test_string_id_serializes_transparently() {
        let id = OrderId::new("ORD-001");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ORD-001\"");
        let parsed: OrderId = serde_json::from_str("\"ORD-002\"").unwrap();
        assert_eq!(parsed.as_str(), "ORD-002");
    }

    #[test]
    fn test_user_ids_are_unique() {
        assert_ne!(UserId::generate(), UserId::generate());
    }
}
