use crate::db;
use crate::engine::{generate_study_plan_for_week, StudyTask};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct GeneratePayload {
    niche: String,
}

#[derive(Debug, Serialize)]
struct GeneratedPlanResponse {
    plan: db::StudyPlanRecord,
}

#[derive(Debug, Serialize)]
struct Progress {
    total: usize,
    completed: usize,
    pct: u32,
}

#[derive(Debug, Serialize)]
struct CurrentPlanResponse {
    plan: Option<db::StudyPlanRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    progress: Option<Progress>,
}

#[derive(Debug, Deserialize)]
struct UpdateTaskPayload {
    task_id: String,
    completed: bool,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/:user_id/generate", post(generate))
        .route("/:user_id", get(current_plan))
        .route("/:user_id/task", patch(update_task))
        .with_state(state)
}

fn current_week_start() -> NaiveDate {
    let today = Utc::now().date_naive();
    today - Duration::days(today.weekday().num_days_from_monday() as i64)
}

/// The plan adapts to the student's recent week: average stored burnout
/// drives intensity down, average stress drives task priority up.
fn performance_from_stress(avg_stress: f64) -> f64 {
    70.0 - avg_stress * 3.0
}

async fn generate(
    Path(user_id): Path<Uuid>,
    State(state): State<SharedState>,
    Json(payload): Json<GeneratePayload>,
) -> Result<(StatusCode, Json<GeneratedPlanResponse>), StatusCode> {
    if payload.niche.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    db::find_user(&state.pool, user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let recent = db::recent_wellness_logs(&state.pool, user_id, 7)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let denom = recent.len().max(1) as f64;
    let avg_stress = recent.iter().map(|l| l.stress as f64).sum::<f64>() / denom;
    let avg_burnout = recent.iter().map(|l| l.burnout_score as f64).sum::<f64>() / denom;

    let week_start = current_week_start();
    let plan = generate_study_plan_for_week(
        &payload.niche,
        avg_burnout,
        performance_from_stress(avg_stress),
        week_start,
    );

    let record = db::upsert_study_plan(&state.pool, user_id, week_start, &payload.niche, &plan)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert study plan: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok((StatusCode::CREATED, Json(GeneratedPlanResponse { plan: record })))
}

async fn current_plan(
    Path(user_id): Path<Uuid>,
    State(state): State<SharedState>,
) -> Result<Json<CurrentPlanResponse>, StatusCode> {
    let record = db::study_plan_for_week(&state.pool, user_id, current_week_start())
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let Some(record) = record else {
        return Ok(Json(CurrentPlanResponse {
            plan: None,
            progress: None,
        }));
    };

    let tasks: Vec<StudyTask> =
        serde_json::from_value(record.tasks.clone()).unwrap_or_else(|_| Vec::new());
    let progress = progress_for(&tasks);
    Ok(Json(CurrentPlanResponse {
        plan: Some(record),
        progress: Some(progress),
    }))
}

async fn update_task(
    Path(user_id): Path<Uuid>,
    State(state): State<SharedState>,
    Json(payload): Json<UpdateTaskPayload>,
) -> Result<StatusCode, StatusCode> {
    let record = db::latest_study_plan(&state.pool, user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let mut tasks: Vec<StudyTask> =
        serde_json::from_value(record.tasks.clone()).unwrap_or_else(|_| Vec::new());
    // `completed` is the only task field a caller may change; an unknown id
    // is a silent no-op.
    if let Some(task) = tasks.iter_mut().find(|t| t.id == payload.task_id) {
        task.completed = payload.completed;
        let tasks_json =
            serde_json::to_value(&tasks).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        db::update_study_plan_tasks(&state.pool, record.id, &tasks_json)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update study plan tasks: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
    }

    Ok(StatusCode::NO_CONTENT)
}

fn progress_for(tasks: &[StudyTask]) -> Progress {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let pct = if total > 0 {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };
    Progress {
        total,
        completed,
        pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Priority, TaskKind};

    fn task(id: &str, completed: bool) -> StudyTask {
        StudyTask {
            id: id.to_string(),
            subject: "Algorithms".to_string(),
            kind: TaskKind::Theory,
            duration_minutes: 60,
            day: "Monday".to_string(),
            priority: Priority::Medium,
            completed,
        }
    }

    #[test]
    fn progress_rounds_to_whole_percent() {
        let tasks = vec![task("task-1", true), task("task-2", false), task("task-3", false)];
        let progress = progress_for(&tasks);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.pct, 33);
    }

    #[test]
    fn progress_of_empty_plan_is_zero() {
        let progress = progress_for(&[]);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.pct, 0);
    }

    #[test]
    fn performance_drops_three_points_per_stress_point() {
        assert_eq!(performance_from_stress(0.0), 70.0);
        assert_eq!(performance_from_stress(5.0), 55.0);
        // beyond stress 6.67 the plan flips every task to high priority
        assert!(performance_from_stress(7.0) < 50.0);
    }
}
