use crate::db::{self, NewWellnessLog};
use crate::engine::{predict_burnout, BurnoutAssessment, WellnessSignal};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct WellnessLogPayload {
    mood: i16,
    stress: i16,
    sleep_hours: f64,
    study_hours: f64,
    notes: Option<String>,
    date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct LogResponse {
    log: db::WellnessLog,
    burnout: BurnoutAssessment,
}

#[derive(Debug, Serialize)]
struct WeeklySummary {
    avg_stress: f64,
    avg_mood: f64,
    avg_sleep: f64,
    avg_study: f64,
    burnout: BurnoutAssessment,
}

#[derive(Debug, Serialize)]
struct LogsResponse {
    logs: Vec<db::WellnessLog>,
    summary: WeeklySummary,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/:user_id/log", post(submit_log))
        .route("/:user_id/logs", get(list_logs))
        .with_state(state)
}

// The engine performs no range validation, so the boundary owns it.
fn validate(payload: &WellnessLogPayload) -> bool {
    (1..=10).contains(&payload.mood)
        && (1..=10).contains(&payload.stress)
        && (0.0..=24.0).contains(&payload.sleep_hours)
        && (0.0..=24.0).contains(&payload.study_hours)
        && payload.notes.as_ref().map_or(true, |n| n.len() <= 500)
}

async fn submit_log(
    Path(user_id): Path<Uuid>,
    State(state): State<SharedState>,
    Json(payload): Json<WellnessLogPayload>,
) -> Result<(StatusCode, Json<LogResponse>), StatusCode> {
    if !validate(&payload) {
        return Err(StatusCode::BAD_REQUEST);
    }
    db::find_user(&state.pool, user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let burnout = predict_burnout(&WellnessSignal {
        stress: payload.stress as f64,
        mood: payload.mood as f64,
        sleep_hours: payload.sleep_hours,
        study_hours: payload.study_hours,
    });

    let log = NewWellnessLog {
        user_id,
        log_date: payload.date.unwrap_or_else(Utc::now),
        mood: payload.mood,
        stress: payload.stress,
        sleep_hours: payload.sleep_hours,
        study_hours: payload.study_hours,
        notes: payload.notes.as_deref(),
    };
    let log = db::insert_wellness_log(&state.pool, &log, &burnout)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert wellness log: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok((StatusCode::CREATED, Json(LogResponse { log, burnout })))
}

async fn list_logs(
    Path(user_id): Path<Uuid>,
    State(state): State<SharedState>,
) -> Result<Json<LogsResponse>, StatusCode> {
    let logs = db::recent_wellness_logs(&state.pool, user_id, 30)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch wellness logs: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    let summary = weekly_summary(&logs);
    Ok(Json(LogsResponse { logs, summary }))
}

/// Averages over the seven most recent logs, re-scored through the predictor.
/// With no logs the averages are zero and the total predictor still produces
/// an assessment; it never errors on an empty history.
fn weekly_summary(logs: &[db::WellnessLog]) -> WeeklySummary {
    let last7 = &logs[..logs.len().min(7)];
    let denom = last7.len().max(1) as f64;
    let avg_stress = last7.iter().map(|l| l.stress as f64).sum::<f64>() / denom;
    let avg_mood = last7.iter().map(|l| l.mood as f64).sum::<f64>() / denom;
    let avg_sleep = last7.iter().map(|l| l.sleep_hours).sum::<f64>() / denom;
    let avg_study = last7.iter().map(|l| l.study_hours).sum::<f64>() / denom;

    let burnout = predict_burnout(&WellnessSignal {
        stress: avg_stress,
        mood: avg_mood,
        sleep_hours: avg_sleep,
        study_hours: avg_study,
    });

    WeeklySummary {
        avg_stress,
        avg_mood,
        avg_sleep,
        avg_study,
        burnout,
    }
}
