//! Domain models for the storefront.
//!
//! Everything here is plain data that lives in the visitor's session:
//! the signed-in user, the cart, the wishlist, account settings and the
//! one-shot flash notice.

pub mod cart;
pub mod flash;
pub mod session;
pub mod settings;
pub mod wishlist;

pub use cart::{Cart, CartLine, MAX_QUANTITY, NewCartLine};
pub use flash::{Flash, FlashKind};
pub use session::{CurrentUser, keys as session_keys};
pub use settings::{AccountSettings, NotificationSettings, PrivacySettings, Profile};
pub use wishlist::{Wishlist, WishlistEntry};
