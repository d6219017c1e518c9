use chrono::{Datelike, Duration, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static SUBJECTS_BY_DOMAIN: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    m.insert(
        "Software Engineering",
        &["Data Structures", "Algorithms", "System Design", "React", "Node.js", "Database Design"],
    );
    m.insert(
        "Data Science",
        &["Python", "Statistics", "Machine Learning", "Data Visualization", "SQL", "Deep Learning"],
    );
    m.insert(
        "UI/UX Design",
        &["Figma", "User Research", "Prototyping", "Design Systems", "Accessibility", "CSS Advanced"],
    );
    m.insert("DevOps", &["Linux", "Docker", "Kubernetes", "CI/CD", "AWS/GCP", "Monitoring"]);
    m.insert(
        "Cybersecurity",
        &[
            "Networking Basics",
            "Ethical Hacking",
            "Cryptography",
            "OWASP",
            "Incident Response",
            "Cloud Security",
        ],
    );
    m.insert(
        "Product Management",
        &[
            "Market Research",
            "Agile/Scrum",
            "User Stories",
            "Analytics",
            "Roadmapping",
            "Stakeholder Management",
        ],
    );
    m.insert(
        "Finance",
        &[
            "Financial Modeling",
            "Excel Advanced",
            "Accounting Basics",
            "Valuation",
            "Risk Management",
            "Bloomberg Terminal",
        ],
    );
    m.insert(
        "General",
        &["Core Subject A", "Core Subject B", "Communication Skills", "Aptitude", "Mock Tests", "Project Work"],
    );
    m
});

const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Moderate,
    Intensive,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Moderate => "moderate",
            Intensity::Intensive => "intensive",
        }
    }

    fn hours_per_day(&self) -> f64 {
        match self {
            Intensity::Light => 3.0,
            Intensity::Moderate => 5.0,
            Intensity::Intensive => 7.0,
        }
    }

    fn focus_tip(&self) -> &'static str {
        match self {
            Intensity::Light => {
                "Focus on quality over quantity. Short, focused sessions with adequate rest."
            }
            Intensity::Moderate => "Use the Pomodoro technique: 25 min study + 5 min break.",
            Intensity::Intensive => {
                "Your performance calls for deep work. Block distractions completely."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    Theory,
    Practice,
    Project,
    Revision,
    MockTest,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyTask {
    pub id: String,
    pub subject: String,
    pub kind: TaskKind,
    pub duration_minutes: u32,
    pub day: String,
    pub priority: Priority,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyPlan {
    pub week_label: String,
    pub tasks: Vec<StudyTask>,
    pub intensity: Intensity,
    pub focus_tip: String,
}

/// Generate a week of study tasks for the current week (Monday-anchored).
pub fn generate_study_plan(domain: &str, burnout_score: f64, performance_score: f64) -> StudyPlan {
    let today = Utc::now().date_naive();
    let week_start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    generate_study_plan_for_week(domain, burnout_score, performance_score, week_start)
}

/// Deterministic core: higher burnout yields a lighter plan. Light plans skip
/// weekends entirely; weekend days at any intensity drop two hours (floored
/// at one). Subjects rotate through a single counter across the whole week.
pub fn generate_study_plan_for_week(
    domain: &str,
    burnout_score: f64,
    performance_score: f64,
    week_start: NaiveDate,
) -> StudyPlan {
    let subjects = SUBJECTS_BY_DOMAIN
        .get(domain)
        .copied()
        .unwrap_or_else(|| SUBJECTS_BY_DOMAIN["General"]);

    let intensity = if burnout_score > 60.0 {
        Intensity::Light
    } else if burnout_score > 30.0 {
        Intensity::Moderate
    } else {
        Intensity::Intensive
    };
    let hours_per_day = intensity.hours_per_day();

    let mut tasks = Vec::new();
    let mut task_counter: usize = 0;

    for (idx, day) in DAYS.iter().enumerate() {
        let is_weekend = idx >= 5;
        if intensity == Intensity::Light && is_weekend {
            continue;
        }
        let today_hours = if is_weekend {
            (hours_per_day - 2.0).max(1.0)
        } else {
            hours_per_day
        };
        let task_count = ((today_hours / 1.5).floor() as usize).max(1);

        for slot in 0..task_count {
            let subject = subjects[(task_counter + slot) % subjects.len()];
            let kind = match slot {
                0 => TaskKind::Theory,
                1 => TaskKind::Practice,
                _ if is_weekend => TaskKind::Revision,
                _ => TaskKind::Project,
            };
            let duration_minutes = match kind {
                TaskKind::MockTest => 180,
                TaskKind::Theory => 60,
                _ => 90,
            };
            let priority = if performance_score < 50.0 {
                Priority::High
            } else {
                Priority::Medium
            };
            tasks.push(StudyTask {
                id: format!("task-{}", task_counter + slot + 1),
                subject: subject.to_string(),
                kind,
                duration_minutes,
                day: day.to_string(),
                priority,
                completed: false,
            });
        }
        task_counter += task_count;
    }

    StudyPlan {
        week_label: format!("Week of {}", week_start.format("%-d %b")),
        tasks,
        intensity,
        focus_tip: intensity.focus_tip().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()
    }

    #[test]
    fn high_burnout_yields_light_weekday_only_plan() {
        let plan = generate_study_plan_for_week("Software Engineering", 70.0, 50.0, monday());
        assert_eq!(plan.intensity, Intensity::Light);
        assert!(plan.tasks.iter().all(|t| t.day != "Saturday" && t.day != "Sunday"));
        // 3 hours a day gives two slots, five days
        assert_eq!(plan.tasks.len(), 10);
    }

    #[test]
    fn low_burnout_yields_intensive_full_week() {
        let plan = generate_study_plan_for_week("Data Science", 20.0, 40.0, monday());
        assert_eq!(plan.intensity, Intensity::Intensive);
        // 7h weekdays -> 4 slots; 5h weekends -> 3 slots
        assert_eq!(plan.tasks.len(), 5 * 4 + 2 * 3);
        let saturday: Vec<_> = plan.tasks.iter().filter(|t| t.day == "Saturday").collect();
        assert_eq!(saturday.len(), 3);
        assert_eq!(saturday[2].kind, TaskKind::Revision);
        assert!(plan.tasks.iter().all(|t| t.priority == Priority::High));
    }

    #[test]
    fn intensity_boundaries_are_exclusive() {
        let at = |score| generate_study_plan_for_week("General", score, 60.0, monday()).intensity;
        assert_eq!(at(61.0), Intensity::Light);
        assert_eq!(at(60.5), Intensity::Light);
        assert_eq!(at(60.0), Intensity::Moderate);
        assert_eq!(at(31.0), Intensity::Moderate);
        assert_eq!(at(30.0), Intensity::Intensive);
    }

    #[test]
    fn moderate_plan_shape() {
        let plan = generate_study_plan_for_week("DevOps", 50.0, 60.0, monday());
        assert_eq!(plan.intensity, Intensity::Moderate);
        // 5h weekdays -> 3 slots; 3h weekends -> 2 slots
        assert_eq!(plan.tasks.len(), 5 * 3 + 2 * 2);
        assert!(plan.tasks.iter().all(|t| t.priority == Priority::Medium));
        let monday_tasks: Vec<_> = plan.tasks.iter().filter(|t| t.day == "Monday").collect();
        assert_eq!(monday_tasks[0].kind, TaskKind::Theory);
        assert_eq!(monday_tasks[0].duration_minutes, 60);
        assert_eq!(monday_tasks[1].kind, TaskKind::Practice);
        assert_eq!(monday_tasks[1].duration_minutes, 90);
        assert_eq!(monday_tasks[2].kind, TaskKind::Project);
    }

    #[test]
    fn subjects_rotate_across_the_whole_week() {
        let plan = generate_study_plan_for_week("Software Engineering", 70.0, 50.0, monday());
        let subjects: Vec<&str> = plan.tasks.iter().map(|t| t.subject.as_str()).collect();
        assert_eq!(
            &subjects[..8],
            &[
                "Data Structures",
                "Algorithms",
                "System Design",
                "React",
                "Node.js",
                "Database Design",
                "Data Structures",
                "Algorithms",
            ]
        );
        assert_eq!(plan.tasks[0].id, "task-1");
        assert_eq!(plan.tasks[9].id, "task-10");
    }

    #[test]
    fn unknown_domain_falls_back_to_general() {
        let plan = generate_study_plan_for_week("Astrobiology", 50.0, 60.0, monday());
        assert_eq!(plan.tasks[0].subject, "Core Subject A");
    }

    #[test]
    fn week_label_renders_from_week_start() {
        let plan = generate_study_plan_for_week("General", 50.0, 60.0, monday());
        assert_eq!(plan.week_label, "Week of 2 Feb");
    }

    #[test]
    fn identical_inputs_give_identical_plans() {
        let a = generate_study_plan_for_week("Finance", 45.0, 30.0, monday());
        let b = generate_study_plan_for_week("Finance", 45.0, 30.0, monday());
        assert_eq!(a, b);
    }
}
