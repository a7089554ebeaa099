//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span with a `request_id` field)
//! 3. Request ID (fills the span field, tags Sentry, echoes the header)
//! 4. Security headers (CSP, frame and isolation policies)
//! 5. Session layer (tower-sessions with an in-memory store)
//! 6. Rate limiting on `/auth` routes (governor)
//!
//! Extractors ([`RequireAuth`], [`RequireAdmin`], [`OptionalAuth`],
//! [`PageContext`]) read the session the session layer attaches.

pub mod auth;
pub mod context;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{
    OptionalAuth, RequireAdmin, RequireAuth, clear_current_user, is_local_path, set_current_user,
};
pub use context::PageContext;
pub use rate_limit::auth_rate_limiter;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
