use crate::db::{self, CareerProfileInput};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct CareerProfilePayload {
    preferred_role: String,
    target_salary: Option<i32>,
    experience: Option<String>,
    education: Option<String>,
    skills: Option<Vec<String>>,
    bio: Option<String>,
}

#[derive(Debug, Serialize)]
struct ProfileResponse {
    profile: Option<db::CareerProfile>,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/:user_id", get(get_profile))
        .route("/:user_id", post(update_profile))
        .with_state(state)
}

async fn get_profile(
    Path(user_id): Path<Uuid>,
    State(state): State<SharedState>,
) -> Result<Json<ProfileResponse>, StatusCode> {
    let profile = db::get_career_profile(&state.pool, user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(ProfileResponse { profile }))
}

async fn update_profile(
    Path(user_id): Path<Uuid>,
    State(state): State<SharedState>,
    Json(payload): Json<CareerProfilePayload>,
) -> Result<Json<db::CareerProfile>, StatusCode> {
    if payload.preferred_role.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    if payload.bio.as_ref().map_or(false, |b| b.len() > 500) {
        return Err(StatusCode::BAD_REQUEST);
    }
    db::find_user(&state.pool, user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let skills = payload.skills.unwrap_or_default();
    let input = CareerProfileInput {
        preferred_role: &payload.preferred_role,
        target_salary: payload.target_salary,
        experience: payload.experience.as_deref(),
        education: payload.education.as_deref(),
        skills: &skills,
        bio: payload.bio.as_deref(),
    };
    let profile = db::upsert_career_profile(&state.pool, user_id, &input)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert career profile: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(Json(profile))
}
