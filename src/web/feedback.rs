use crate::db::{self, NewFeedbackEntry};
use crate::engine::analyze_feedback;
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct FeedbackPayload {
    difficulty_rating: i16,
    satisfaction_score: i16,
    stress_triggers: Option<Vec<String>>,
    comments: Option<String>,
    week_of: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct FeedbackResponse {
    feedback: db::FeedbackEntry,
}

#[derive(Debug, Serialize)]
struct FeedbackListResponse {
    feedbacks: Vec<db::FeedbackEntry>,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/:user_id", get(list_feedback))
        .route("/:user_id", post(submit_feedback))
        .with_state(state)
}

fn validate(payload: &FeedbackPayload) -> bool {
    (1..=10).contains(&payload.difficulty_rating)
        && (1..=10).contains(&payload.satisfaction_score)
        && payload.comments.as_ref().map_or(true, |c| c.len() <= 1000)
}

async fn submit_feedback(
    Path(user_id): Path<Uuid>,
    State(state): State<SharedState>,
    Json(payload): Json<FeedbackPayload>,
) -> Result<(StatusCode, Json<FeedbackResponse>), StatusCode> {
    if !validate(&payload) {
        return Err(StatusCode::BAD_REQUEST);
    }
    db::find_user(&state.pool, user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let analysis = analyze_feedback(
        payload.comments.as_deref().unwrap_or(""),
        payload.satisfaction_score as f64,
    );

    let stress_triggers = payload.stress_triggers.unwrap_or_default();
    let entry = NewFeedbackEntry {
        user_id,
        week_of: payload.week_of.unwrap_or_else(|| Utc::now().date_naive()),
        difficulty_rating: payload.difficulty_rating,
        satisfaction_score: payload.satisfaction_score,
        stress_triggers: &stress_triggers,
        comments: payload.comments.as_deref(),
    };
    let feedback = db::insert_feedback(&state.pool, &entry, &analysis)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert feedback: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok((StatusCode::CREATED, Json(FeedbackResponse { feedback })))
}

async fn list_feedback(
    Path(user_id): Path<Uuid>,
    State(state): State<SharedState>,
) -> Result<Json<FeedbackListResponse>, StatusCode> {
    let feedbacks = db::recent_feedback(&state.pool, user_id, 10)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch feedback: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(Json(FeedbackListResponse { feedbacks }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(difficulty: i16, satisfaction: i16) -> FeedbackPayload {
        FeedbackPayload {
            difficulty_rating: difficulty,
            satisfaction_score: satisfaction,
            stress_triggers: None,
            comments: None,
            week_of: None,
        }
    }

    #[test]
    fn ratings_must_stay_in_range() {
        assert!(validate(&payload(5, 5)));
        assert!(!validate(&payload(0, 5)));
        assert!(!validate(&payload(5, 11)));
    }

    #[test]
    fn overlong_comments_are_rejected() {
        let mut p = payload(5, 5);
        p.comments = Some("x".repeat(1001));
        assert!(!validate(&p));
    }
}
