pub mod seed;

use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

use crate::engine::BurnoutAssessment;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Mentor,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub mentor_id: Option<Uuid>,
    pub niche: String,
    pub bio: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WellnessLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub log_date: DateTime<Utc>,
    pub mood: i16,
    pub stress: i16,
    pub sleep_hours: f64,
    pub study_hours: f64,
    pub notes: Option<String>,
    pub burnout_score: i16,
    pub burnout_risk: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudyPlanRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start: NaiveDate,
    pub week_label: String,
    pub niche: String,
    pub intensity: String,
    pub focus_tip: String,
    pub tasks: serde_json::Value,
    pub ai_generated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub niche: String,
    pub preferred_role: String,
    pub skills: Vec<String>,
    pub gaps: Vec<String>,
    pub roadmap: serde_json::Value,
    pub last_analyzed: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub preferred_role: String,
    pub target_salary: Option<i32>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedbackEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_of: NaiveDate,
    pub difficulty_rating: i16,
    pub satisfaction_score: i16,
    pub stress_triggers: Vec<String>,
    pub comments: Option<String>,
    pub sentiment: String,
    pub key_themes: Vec<String>,
    pub recommendations: Vec<String>,
    pub confidence_score: f64,
    pub created_at: DateTime<Utc>,
}

pub async fn find_user(pool: &PgPool, id: Uuid) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, full_name, email, role, mentor_id, niche, bio, is_active, created_at
        FROM users
        WHERE id = $1
          AND is_active = true
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn students_for_mentor(pool: &PgPool, mentor_id: Uuid) -> Result<Vec<DbUser>> {
    let students = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, full_name, email, role, mentor_id, niche, bio, is_active, created_at
        FROM users
        WHERE mentor_id = $1
          AND role = 'STUDENT'
          AND is_active = true
        ORDER BY full_name ASC
        "#,
    )
    .bind(mentor_id)
    .fetch_all(pool)
    .await?;
    Ok(students)
}

pub struct NewWellnessLog<'a> {
    pub user_id: Uuid,
    pub log_date: DateTime<Utc>,
    pub mood: i16,
    pub stress: i16,
    pub sleep_hours: f64,
    pub study_hours: f64,
    pub notes: Option<&'a str>,
}

pub async fn insert_wellness_log(
    pool: &PgPool,
    log: &NewWellnessLog<'_>,
    assessment: &BurnoutAssessment,
) -> Result<WellnessLog> {
    let inserted = sqlx::query_as::<_, WellnessLog>(
        r#"
        INSERT INTO wellness_logs
            (id, user_id, log_date, mood, stress, sleep_hours, study_hours, notes,
             burnout_score, burnout_risk)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, user_id, log_date, mood, stress, sleep_hours, study_hours, notes,
                  burnout_score, burnout_risk, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(log.user_id)
    .bind(log.log_date)
    .bind(log.mood)
    .bind(log.stress)
    .bind(log.sleep_hours)
    .bind(log.study_hours)
    .bind(log.notes)
    .bind(assessment.score as i16)
    .bind(assessment.risk.as_str())
    .fetch_one(pool)
    .await?;
    Ok(inserted)
}

pub async fn recent_wellness_logs(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<WellnessLog>> {
    let logs = sqlx::query_as::<_, WellnessLog>(
        r#"
        SELECT id, user_id, log_date, mood, stress, sleep_hours, study_hours, notes,
               burnout_score, burnout_risk, created_at
        FROM wellness_logs
        WHERE user_id = $1
        ORDER BY log_date DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(logs)
}

pub async fn upsert_study_plan(
    pool: &PgPool,
    user_id: Uuid,
    week_start: NaiveDate,
    niche: &str,
    plan: &crate::engine::StudyPlan,
) -> Result<StudyPlanRecord> {
    let tasks = serde_json::to_value(&plan.tasks)?;
    let record = sqlx::query_as::<_, StudyPlanRecord>(
        r#"
        INSERT INTO study_plans
            (id, user_id, week_start, week_label, niche, intensity, focus_tip, tasks)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (user_id, week_start) DO UPDATE
        SET week_label = EXCLUDED.week_label,
            niche = EXCLUDED.niche,
            intensity = EXCLUDED.intensity,
            focus_tip = EXCLUDED.focus_tip,
            tasks = EXCLUDED.tasks,
            updated_at = NOW()
        RETURNING id, user_id, week_start, week_label, niche, intensity, focus_tip, tasks,
                  ai_generated, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(week_start)
    .bind(&plan.week_label)
    .bind(niche)
    .bind(plan.intensity.as_str())
    .bind(&plan.focus_tip)
    .bind(tasks)
    .fetch_one(pool)
    .await?;
    Ok(record)
}

pub async fn study_plan_for_week(
    pool: &PgPool,
    user_id: Uuid,
    week_start: NaiveDate,
) -> Result<Option<StudyPlanRecord>> {
    let plan = sqlx::query_as::<_, StudyPlanRecord>(
        r#"
        SELECT id, user_id, week_start, week_label, niche, intensity, focus_tip, tasks,
               ai_generated, created_at, updated_at
        FROM study_plans
        WHERE user_id = $1
          AND week_start = $2
        "#,
    )
    .bind(user_id)
    .bind(week_start)
    .fetch_optional(pool)
    .await?;
    Ok(plan)
}

pub async fn latest_study_plan(pool: &PgPool, user_id: Uuid) -> Result<Option<StudyPlanRecord>> {
    let plan = sqlx::query_as::<_, StudyPlanRecord>(
        r#"
        SELECT id, user_id, week_start, week_label, niche, intensity, focus_tip, tasks,
               ai_generated, created_at, updated_at
        FROM study_plans
        WHERE user_id = $1
        ORDER BY week_start DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(plan)
}

pub async fn update_study_plan_tasks(
    pool: &PgPool,
    plan_id: Uuid,
    tasks: &serde_json::Value,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE study_plans
        SET tasks = $2, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(plan_id)
    .bind(tasks)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn get_skill_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<SkillProfile>> {
    let profile = sqlx::query_as::<_, SkillProfile>(
        r#"
        SELECT id, user_id, niche, preferred_role, skills, gaps, roadmap, last_analyzed
        FROM skill_profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(profile)
}

pub async fn upsert_skill_profile(
    pool: &PgPool,
    user_id: Uuid,
    niche: &str,
    preferred_role: &str,
    skills: &[String],
    gaps: &[String],
    roadmap: &serde_json::Value,
) -> Result<SkillProfile> {
    let profile = sqlx::query_as::<_, SkillProfile>(
        r#"
        INSERT INTO skill_profiles
            (id, user_id, niche, preferred_role, skills, gaps, roadmap, last_analyzed)
        VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
        ON CONFLICT (user_id) DO UPDATE
        SET niche = EXCLUDED.niche,
            preferred_role = EXCLUDED.preferred_role,
            skills = EXCLUDED.skills,
            gaps = EXCLUDED.gaps,
            roadmap = EXCLUDED.roadmap,
            last_analyzed = NOW()
        RETURNING id, user_id, niche, preferred_role, skills, gaps, roadmap, last_analyzed
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(niche)
    .bind(preferred_role)
    .bind(skills)
    .bind(gaps)
    .bind(roadmap)
    .fetch_one(pool)
    .await?;
    Ok(profile)
}

pub struct CareerProfileInput<'a> {
    pub preferred_role: &'a str,
    pub target_salary: Option<i32>,
    pub experience: Option<&'a str>,
    pub education: Option<&'a str>,
    pub skills: &'a [String],
    pub bio: Option<&'a str>,
}

pub async fn get_career_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<CareerProfile>> {
    let profile = sqlx::query_as::<_, CareerProfile>(
        r#"
        SELECT id, user_id, preferred_role, target_salary, experience, education, skills, bio,
               updated_at
        FROM career_profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(profile)
}

pub async fn upsert_career_profile(
    pool: &PgPool,
    user_id: Uuid,
    input: &CareerProfileInput<'_>,
) -> Result<CareerProfile> {
    let profile = sqlx::query_as::<_, CareerProfile>(
        r#"
        INSERT INTO career_profiles
            (id, user_id, preferred_role, target_salary, experience, education, skills, bio)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (user_id) DO UPDATE
        SET preferred_role = EXCLUDED.preferred_role,
            target_salary = EXCLUDED.target_salary,
            experience = EXCLUDED.experience,
            education = EXCLUDED.education,
            skills = EXCLUDED.skills,
            bio = EXCLUDED.bio,
            updated_at = NOW()
        RETURNING id, user_id, preferred_role, target_salary, experience, education, skills, bio,
                  updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(input.preferred_role)
    .bind(input.target_salary)
    .bind(input.experience)
    .bind(input.education)
    .bind(input.skills)
    .bind(input.bio)
    .fetch_one(pool)
    .await?;
    Ok(profile)
}

pub struct NewFeedbackEntry<'a> {
    pub user_id: Uuid,
    pub week_of: NaiveDate,
    pub difficulty_rating: i16,
    pub satisfaction_score: i16,
    pub stress_triggers: &'a [String],
    pub comments: Option<&'a str>,
}

pub async fn insert_feedback(
    pool: &PgPool,
    entry: &NewFeedbackEntry<'_>,
    analysis: &crate::engine::FeedbackAnalysis,
) -> Result<FeedbackEntry> {
    let inserted = sqlx::query_as::<_, FeedbackEntry>(
        r#"
        INSERT INTO feedback_entries
            (id, user_id, week_of, difficulty_rating, satisfaction_score, stress_triggers,
             comments, sentiment, key_themes, recommendations, confidence_score)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id, user_id, week_of, difficulty_rating, satisfaction_score, stress_triggers,
                  comments, sentiment, key_themes, recommendations, confidence_score, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(entry.user_id)
    .bind(entry.week_of)
    .bind(entry.difficulty_rating)
    .bind(entry.satisfaction_score)
    .bind(entry.stress_triggers)
    .bind(entry.comments)
    .bind(analysis.sentiment.as_str())
    .bind(&analysis.key_themes)
    .bind(&analysis.recommendations)
    .bind(analysis.confidence_score)
    .fetch_one(pool)
    .await?;
    Ok(inserted)
}

pub async fn recent_feedback(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<FeedbackEntry>> {
    let entries = sqlx::query_as::<_, FeedbackEntry>(
        r#"
        SELECT id, user_id, week_of, difficulty_rating, satisfaction_score, stress_triggers,
               comments, sentiment, key_themes, recommendations, confidence_score, created_at
        FROM feedback_entries
        WHERE user_id = $1
        ORDER BY week_of DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

#[derive(Debug, Serialize)]
pub struct RoleCounts {
    pub total: i64,
    pub students: i64,
    pub mentors: i64,
    pub admins: i64,
}

#[derive(Debug, Serialize)]
pub struct PlatformWellness {
    pub avg_stress: f64,
    pub avg_mood: f64,
    pub avg_sleep: f64,
}

pub async fn count_users_by_role(pool: &PgPool) -> Result<RoleCounts> {
    let row = sqlx::query(
        r#"
        SELECT
            COUNT(*) AS total,
            COUNT(*) FILTER (WHERE role = 'STUDENT') AS students,
            COUNT(*) FILTER (WHERE role = 'MENTOR') AS mentors,
            COUNT(*) FILTER (WHERE role = 'ADMIN') AS admins
        FROM users
        WHERE is_active = true
        "#,
    )
    .fetch_one(pool)
    .await?;
    Ok(RoleCounts {
        total: row.get("total"),
        students: row.get("students"),
        mentors: row.get("mentors"),
        admins: row.get("admins"),
    })
}

/// Platform-wide 30-day wellness averages; zeros when no logs exist yet.
pub async fn platform_wellness(pool: &PgPool) -> Result<PlatformWellness> {
    let since = Utc::now() - Duration::days(30);
    let row = sqlx::query(
        r#"
        SELECT
            COALESCE(AVG(stress), 0)::DOUBLE PRECISION AS avg_stress,
            COALESCE(AVG(mood), 0)::DOUBLE PRECISION AS avg_mood,
            COALESCE(AVG(sleep_hours), 0)::DOUBLE PRECISION AS avg_sleep
        FROM wellness_logs
        WHERE log_date >= $1
        "#,
    )
    .bind(since)
    .fetch_one(pool)
    .await?;
    Ok(PlatformWellness {
        avg_stress: row.get("avg_stress"),
        avg_mood: row.get("avg_mood"),
        avg_sleep: row.get("avg_sleep"),
    })
}

pub async fn count_high_burnout_users(pool: &PgPool) -> Result<i64> {
    let since = Utc::now() - Duration::days(30);
    let row = sqlx::query(
        r#"
        SELECT COUNT(DISTINCT user_id) AS total
        FROM wellness_logs
        WHERE burnout_risk = 'high'
          AND log_date >= $1
        "#,
    )
    .bind(since)
    .fetch_one(pool)
    .await?;
    Ok(row.get("total"))
}

pub async fn count_wellness_logs(pool: &PgPool) -> Result<i64> {
    let row = sqlx::query("SELECT COUNT(*) AS total FROM wellness_logs")
        .fetch_one(pool)
        .await?;
    Ok(row.get("total"))
}
