pub mod admin;
pub mod career;
pub mod feedback;
pub mod mentor;
pub mod skills;
pub mod study_plan;
pub mod wellness;

use crate::state::SharedState;
use axum::{routing::get, Router};

async fn health() -> &'static str {
    "OK"
}

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/wellness", wellness::router(state.clone()))
        .nest("/api/study-plan", study_plan::router(state.clone()))
        .nest("/api/skills", skills::router(state.clone()))
        .nest("/api/career", career::router(state.clone()))
        .nest("/api/feedback", feedback::router(state.clone()))
        .nest("/api/mentor", mentor::router(state.clone()))
        .nest("/api/admin", admin::router(state))
}
