use crate::db;
use crate::engine::{analyze_skill_gap, SkillGapReport};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct SkillAnalysisPayload {
    niche: String,
    role: String,
    skills: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ProfileResponse {
    profile: Option<db::SkillProfile>,
}

#[derive(Debug, Serialize)]
struct AnalysisResponse {
    profile: db::SkillProfile,
    analysis: SkillGapReport,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/:user_id", get(get_profile))
        .route("/:user_id", post(run_analysis))
        .with_state(state)
}

async fn get_profile(
    Path(user_id): Path<Uuid>,
    State(state): State<SharedState>,
) -> Result<Json<ProfileResponse>, StatusCode> {
    let profile = db::get_skill_profile(&state.pool, user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(ProfileResponse { profile }))
}

async fn run_analysis(
    Path(user_id): Path<Uuid>,
    State(state): State<SharedState>,
    Json(payload): Json<SkillAnalysisPayload>,
) -> Result<Json<AnalysisResponse>, StatusCode> {
    if payload.niche.trim().is_empty() || payload.role.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    db::find_user(&state.pool, user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let analysis = analyze_skill_gap(&payload.role, &payload.skills);
    let roadmap = stored_roadmap(&analysis)?;

    let profile = db::upsert_skill_profile(
        &state.pool,
        user_id,
        &payload.niche,
        &payload.role,
        &payload.skills,
        &analysis.missing_skills,
        &roadmap,
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to upsert skill profile: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(AnalysisResponse { profile, analysis }))
}

// Stored roadmap steps carry a completion flag the student can tick off later.
fn stored_roadmap(analysis: &SkillGapReport) -> Result<Value, StatusCode> {
    let mut roadmap =
        serde_json::to_value(&analysis.roadmap).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    if let Value::Array(steps) = &mut roadmap {
        for step in steps {
            if let Value::Object(map) = step {
                map.insert("completed".to_string(), Value::Bool(false));
            }
        }
    }
    Ok(roadmap)
}
