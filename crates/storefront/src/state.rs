//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::content::SiteContent;
use crate::orders::OrderBook;
use crate::services::AuthService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything behind it is
/// read-only; per-visitor state lives in the session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    orders: OrderBook,
    content: SiteContent,
}

impl AppState {
    /// Create application state with the seeded catalog, orders and content.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_data(
            config,
            Catalog::seeded(),
            OrderBook::seeded(),
            SiteContent::default(),
        )
    }

    /// Create application state from explicit data.
    #[must_use]
    pub fn with_data(
        config: StorefrontConfig,
        catalog: Catalog,
        orders: OrderBook,
        content: SiteContent,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                orders,
                content,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the order history.
    #[must_use]
    pub fn orders(&self) -> &OrderBook {
        &self.inner.orders
    }

    /// Get a reference to the static site content.
    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.inner.content
    }

    /// Authentication service bound to the configured admin address.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.inner.config.admin_email)
    }
}
