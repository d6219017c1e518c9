use crate::db::{self, UserRole};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
struct AnalyticsResponse {
    users: db::RoleCounts,
    wellness: db::PlatformWellness,
    high_burnout_count: i64,
    total_wellness_logs: i64,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/:admin_id/analytics", get(analytics))
        .with_state(state)
}

async fn analytics(
    Path(admin_id): Path<Uuid>,
    State(state): State<SharedState>,
) -> Result<Json<AnalyticsResponse>, StatusCode> {
    let admin = db::find_user(&state.pool, admin_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;
    if admin.role != UserRole::Admin {
        return Err(StatusCode::FORBIDDEN);
    }

    let users = db::count_users_by_role(&state.pool)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let wellness = db::platform_wellness(&state.pool)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let high_burnout_count = db::count_high_burnout_users(&state.pool)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let total_wellness_logs = db::count_wellness_logs(&state.pool)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(AnalyticsResponse {
        users,
        wellness,
        high_burnout_count,
        total_wellness_logs,
    }))
}
