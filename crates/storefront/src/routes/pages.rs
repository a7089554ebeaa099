//! Static content pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::content::{CompanyValue, Milestone, TeamMember};
use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub page: PageContext,
    pub values: Vec<CompanyValue>,
    pub team: Vec<TeamMember>,
    pub milestones: Vec<Milestone>,
}

/// Display the About page.
#[instrument(skip_all)]
pub async fn about(State(state): State<AppState>, page: PageContext) -> impl IntoResponse {
    let content = state.content();
    AboutTemplate {
        page,
        values: content.values.clone(),
        team: content.team.clone(),
        milestones: content.milestones.clone(),
    }
}
