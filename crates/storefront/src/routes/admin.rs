//! Admin dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::content::{AdminOrder, MenuItem, StatCard};
use crate::filters;
use crate::middleware::{PageContext, RequireAdmin};
use crate::models::CurrentUser;
use crate::state::AppState;

/// Low-stock row on the admin dashboard.
#[derive(Debug, Clone)]
pub struct StockAlert {
    pub id: String,
    pub name: String,
    pub category: String,
    pub stock: u32,
}

impl StockAlert {
    #[must_use]
    pub const fn is_out(&self) -> bool {
        self.stock == 0
    }
}

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub page: PageContext,
    pub admin: CurrentUser,
    pub stats: Vec<StatCard>,
    pub recent_orders: Vec<AdminOrder>,
    pub low_stock: Vec<StockAlert>,
    pub menu: Vec<MenuItem>,
}

/// Display the admin dashboard.
#[instrument(skip_all, fields(admin_id = %admin.id))]
pub async fn dashboard(
    State(state): State<AppState>,
    page: PageContext,
    RequireAdmin(admin): RequireAdmin,
) -> impl IntoResponse {
    let content = state.content();
    let low_stock = state
        .catalog()
        .low_stock()
        .into_iter()
        .map(|p| StockAlert {
            id: p.id.to_string(),
            name: p.name.clone(),
            category: p.category.clone(),
            stock: p.stock,
        })
        .collect();

    AdminDashboardTemplate {
        page,
        admin,
        stats: content.admin_stats.clone(),
        recent_orders: content.admin_orders.clone(),
        low_stock,
        menu: content.admin_menu.clone(),
    }
}
