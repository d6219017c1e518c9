use crate::db::{self, UserRole};
use crate::engine::{predict_burnout, BurnoutAssessment, WellnessSignal};
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
struct WellnessAverages {
    stress: f64,
    mood: f64,
    sleep: f64,
    study: f64,
}

#[derive(Debug, Serialize)]
struct StudentOverview {
    #[serde(flatten)]
    student: db::DbUser,
    wellness_summary: WellnessAverages,
    burnout: BurnoutAssessment,
}

#[derive(Debug, Serialize)]
struct StudentsResponse {
    students: Vec<StudentOverview>,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/:mentor_id/students", get(list_students))
        .with_state(state)
}

async fn list_students(
    Path(mentor_id): Path<Uuid>,
    State(state): State<SharedState>,
) -> Result<Json<StudentsResponse>, StatusCode> {
    let mentor = db::find_user(&state.pool, mentor_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;
    if mentor.role != UserRole::Mentor && mentor.role != UserRole::Admin {
        return Err(StatusCode::FORBIDDEN);
    }

    let students = db::students_for_mentor(&state.pool, mentor_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let mut overviews = Vec::with_capacity(students.len());
    for student in students {
        let logs = db::recent_wellness_logs(&state.pool, student.id, 7)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch logs for student {}: {}", student.id, e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;

        let denom = logs.len().max(1) as f64;
        let summary = WellnessAverages {
            stress: logs.iter().map(|l| l.stress as f64).sum::<f64>() / denom,
            mood: logs.iter().map(|l| l.mood as f64).sum::<f64>() / denom,
            sleep: logs.iter().map(|l| l.sleep_hours).sum::<f64>() / denom,
            study: logs.iter().map(|l| l.study_hours).sum::<f64>() / denom,
        };

        // Unlogged students are assessed at neutral defaults instead of zeros,
        // which would otherwise read as a severe sleep deficit.
        let burnout = predict_burnout(&WellnessSignal {
            stress: non_zero_or(summary.stress, 5.0),
            mood: non_zero_or(summary.mood, 5.0),
            sleep_hours: non_zero_or(summary.sleep, 7.0),
            study_hours: non_zero_or(summary.study, 5.0),
        });

        overviews.push(StudentOverview {
            student,
            wellness_summary: summary,
            burnout,
        });
    }

    Ok(Json(StudentsResponse { students: overviews }))
}

fn non_zero_or(value: f64, fallback: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RiskTier;

    #[test]
    fn neutral_defaults_replace_empty_averages() {
        assert_eq!(non_zero_or(0.0, 7.0), 7.0);
        assert_eq!(non_zero_or(6.5, 7.0), 6.5);
    }

    #[test]
    fn unlogged_student_reads_as_low_risk() {
        let burnout = predict_burnout(&WellnessSignal {
            stress: non_zero_or(0.0, 5.0),
            mood: non_zero_or(0.0, 5.0),
            sleep_hours: non_zero_or(0.0, 7.0),
            study_hours: non_zero_or(0.0, 5.0),
        });
        // 20 stress points + 5 mood points, no sleep or study penalty
        assert_eq!(burnout.score, 25);
        assert_eq!(burnout.risk, RiskTier::Low);
    }
}
