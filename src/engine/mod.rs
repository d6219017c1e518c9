//! Deterministic advisory engine: burnout scoring, adaptive study plans,
//! skill-gap analysis, and feedback sentiment. Every function here is pure
//! and total, with no I/O, randomness, or state between calls; callers own
//! input validation and persistence.

pub mod burnout;
pub mod feedback;
pub mod skill_gap;
pub mod study_plan;

pub use burnout::{predict_burnout, BurnoutAssessment, RiskTier, WellnessSignal};
pub use feedback::{analyze_feedback, FeedbackAnalysis, Sentiment};
pub use skill_gap::{analyze_skill_gap, RoadmapKind, RoadmapStep, SkillGapReport};
pub use study_plan::{
    generate_study_plan, generate_study_plan_for_week, Intensity, Priority, StudyPlan, StudyTask,
    TaskKind,
};
