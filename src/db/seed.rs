use anyhow::Result;
use chrono::{Duration, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::db::{self, NewWellnessLog, UserRole};
use crate::engine::{predict_burnout, WellnessSignal};

struct SeedUser<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    role: UserRole,
    mentor: Option<&'a str>,
    niche: &'a str,
}

const MENTOR_ID: &str = "7c9a2f14-53be-4d6a-9c31-08b8f14be1a2";
const STUDENT_A_ID: &str = "1f6a8a52-7e0d-4b9e-b7a3-5a2d4c1f9e10";
const STUDENT_B_ID: &str = "c4d1b9e7-2a86-49f0-8d15-6e3b7a90cd24";

pub async fn seed_all(pool: &PgPool) -> Result<()> {
    seed_users(pool).await?;
    seed_wellness_logs(pool).await?;
    Ok(())
}

async fn seed_users(pool: &PgPool) -> Result<()> {
    let users = vec![
        SeedUser {
            id: "9b14d0a3-6f27-4f58-9d02-3e5c8b7a61f0",
            name: "Priya Raman",
            email: "priya.raman@scholarmind.app",
            role: UserRole::Admin,
            mentor: None,
            niche: "General",
        },
        SeedUser {
            id: MENTOR_ID,
            name: "Daniel Okoye",
            email: "daniel.okoye@scholarmind.app",
            role: UserRole::Mentor,
            mentor: None,
            niche: "Software Engineering",
        },
        SeedUser {
            id: STUDENT_A_ID,
            name: "Mei-Ling Chen",
            email: "meiling.chen@scholarmind.app",
            role: UserRole::Student,
            mentor: Some(MENTOR_ID),
            niche: "Software Engineering",
        },
        SeedUser {
            id: STUDENT_B_ID,
            name: "Tomas Herrera",
            email: "tomas.herrera@scholarmind.app",
            role: UserRole::Student,
            mentor: Some(MENTOR_ID),
            niche: "Data Science",
        },
    ];

    for user in users {
        let mentor_id = user.mentor.map(Uuid::parse_str).transpose()?;
        sqlx::query(
            r#"
            INSERT INTO users (id, full_name, email, role, mentor_id, niche)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (email) DO UPDATE
            SET full_name = EXCLUDED.full_name,
                role = EXCLUDED.role,
                mentor_id = EXCLUDED.mentor_id,
                niche = EXCLUDED.niche
            "#,
        )
        .bind(Uuid::parse_str(user.id)?)
        .bind(user.name)
        .bind(user.email)
        .bind(user.role)
        .bind(mentor_id)
        .bind(user.niche)
        .execute(pool)
        .await?;
    }

    tracing::info!("Seeded demo users");
    Ok(())
}

/// A week of demo logs for the first student, scored through the predictor
/// the same way the submission endpoint does. Skipped once any logs exist.
async fn seed_wellness_logs(pool: &PgPool) -> Result<()> {
    let student = Uuid::parse_str(STUDENT_A_ID)?;
    let existing: i64 = sqlx::query("SELECT COUNT(*) AS total FROM wellness_logs WHERE user_id = $1")
        .bind(student)
        .fetch_one(pool)
        .await?
        .get("total");
    if existing > 0 {
        return Ok(());
    }

    // (days ago, mood, stress, sleep, study)
    let week: [(i64, i16, i16, f64, f64); 7] = [
        (7, 7, 4, 7.5, 6.0),
        (6, 6, 5, 7.0, 7.0),
        (5, 6, 6, 6.5, 8.5),
        (4, 5, 7, 6.0, 9.0),
        (3, 4, 8, 5.5, 10.5),
        (2, 5, 7, 6.5, 9.5),
        (1, 6, 6, 7.0, 8.0),
    ];

    for (days_ago, mood, stress, sleep_hours, study_hours) in week {
        let assessment = predict_burnout(&WellnessSignal {
            stress: stress as f64,
            mood: mood as f64,
            sleep_hours,
            study_hours,
        });
        let log = NewWellnessLog {
            user_id: student,
            log_date: Utc::now() - Duration::days(days_ago),
            mood,
            stress,
            sleep_hours,
            study_hours,
            notes: None,
        };
        db::insert_wellness_log(pool, &log, &assessment).await?;
    }

    tracing::info!("Seeded demo wellness logs");
    Ok(())
}
