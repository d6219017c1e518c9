use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static ROLE_REQUIREMENTS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    m.insert(
        "Frontend Developer",
        &["React", "TypeScript", "CSS", "HTML", "Git", "Responsive Design", "REST APIs"],
    );
    m.insert(
        "Backend Developer",
        &["Node.js", "SQL", "REST APIs", "Authentication", "Docker", "Testing", "Git"],
    );
    m.insert(
        "Full Stack Developer",
        &["React", "Node.js", "MongoDB/PostgreSQL", "TypeScript", "Docker", "Git", "REST APIs"],
    );
    m.insert(
        "Data Scientist",
        &["Python", "Machine Learning", "Statistics", "Pandas", "SQL", "Visualization", "Deep Learning"],
    );
    m.insert(
        "DevOps Engineer",
        &["Linux", "Docker", "Kubernetes", "CI/CD", "AWS", "Terraform", "Monitoring"],
    );
    m.insert(
        "UX Designer",
        &["Figma", "User Research", "Wireframing", "Prototyping", "Design Systems", "Usability Testing"],
    );
    m.insert(
        "Product Manager",
        &["Agile", "User Stories", "Data Analysis", "Communication", "Roadmapping", "Stakeholder Management"],
    );
    m.insert(
        "Cybersecurity Analyst",
        &["Networking", "SIEM", "Vulnerability Assessment", "Python", "OWASP", "Incident Response"],
    );
    m
});

static RESOURCE_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("React", "React Official Docs + Scrimba React Course");
    m.insert("TypeScript", "TypeScript Handbook (typescriptlang.org)");
    m.insert("Node.js", "Node.js Official Docs + The Odin Project");
    m.insert("Python", "Python.org Tutorial + Kaggle Learn");
    m.insert("Machine Learning", "fast.ai Practical Deep Learning");
    m.insert("Docker", "Docker Getting Started Guide");
    m.insert("Kubernetes", "Kubernetes.io Interactive Tutorial");
    m.insert("AWS", "AWS Skill Builder Free Tier");
    m.insert("SQL", "Mode Analytics SQL Tutorial");
    m.insert("Figma", "Figma Community + DesignCourse YouTube");
    m
});

const FALLBACK_RESOURCE: &str = "Search on Coursera, Udemy, or YouTube";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoadmapKind {
    Course,
    Project,
    Practice,
    Certification,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapStep {
    pub week: u32,
    pub skill: String,
    pub resource: String,
    pub kind: RoadmapKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillGapReport {
    pub missing_skills: Vec<String>,
    pub present_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub roadmap: Vec<RoadmapStep>,
}

/// Split a role's required skills into present and missing against the user's
/// self-reported list, and lay the missing ones out as a weekly roadmap.
///
/// Matching is a case-insensitive substring test: a requirement counts as
/// present when any user skill contains it. That makes the table strings
/// load-bearing ("PostgreSQL" satisfies "SQL", but not "MongoDB/PostgreSQL");
/// the behavior is calibrated against the tables as written, so it is kept
/// rather than tightened to exact matching.
pub fn analyze_skill_gap(role: &str, user_skills: &[String]) -> SkillGapReport {
    let required = ROLE_REQUIREMENTS.get(role).copied().unwrap_or(&[]);
    let user_lower: Vec<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();
    let has = |required_skill: &str| {
        let needle = required_skill.to_lowercase();
        user_lower.iter().any(|u| u.contains(&needle))
    };

    let present_skills: Vec<String> =
        required.iter().filter(|r| has(r)).map(|r| r.to_string()).collect();
    let missing_skills: Vec<String> =
        required.iter().filter(|r| !has(r)).map(|r| r.to_string()).collect();

    let roadmap: Vec<RoadmapStep> = missing_skills
        .iter()
        .enumerate()
        .map(|(idx, skill)| RoadmapStep {
            week: idx as u32 + 1,
            skill: skill.clone(),
            resource: RESOURCE_MAP
                .get(skill.as_str())
                .copied()
                .unwrap_or(FALLBACK_RESOURCE)
                .to_string(),
            kind: if idx == missing_skills.len() - 1 {
                RoadmapKind::Certification
            } else if idx % 2 == 0 {
                RoadmapKind::Course
            } else {
                RoadmapKind::Project
            },
        })
        .collect();

    let top_missing = missing_skills
        .iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join(" and ");
    let recommendations = vec![
        format!("Focus on {top_missing} first — highest demand for {role}."),
        "Build 2-3 portfolio projects demonstrating your skills.".to_string(),
        "Contribute to open source to show real-world experience.".to_string(),
        format!("Complete a {role}-specific certification within 3 months."),
    ];

    SkillGapReport {
        missing_skills,
        present_skills,
        recommendations,
        roadmap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn complete_skill_set_leaves_no_gaps() {
        let report = analyze_skill_gap(
            "Frontend Developer",
            &skills(&["React", "TypeScript", "CSS", "HTML", "Git", "Responsive Design", "REST APIs"]),
        );
        assert!(report.missing_skills.is_empty());
        assert_eq!(
            report.present_skills,
            vec!["React", "TypeScript", "CSS", "HTML", "Git", "Responsive Design", "REST APIs"]
        );
        assert!(report.roadmap.is_empty());
    }

    #[test]
    fn present_and_missing_partition_the_requirements() {
        let report = analyze_skill_gap("Frontend Developer", &skills(&["React", "CSS"]));
        let required: &[&str] =
            &["React", "TypeScript", "CSS", "HTML", "Git", "Responsive Design", "REST APIs"];
        for skill in required {
            let present = report.present_skills.iter().any(|s| s == skill);
            let missing = report.missing_skills.iter().any(|s| s == skill);
            assert!(present ^ missing, "{skill} must be in exactly one set");
        }
        assert_eq!(report.present_skills.len() + report.missing_skills.len(), required.len());
    }

    #[test]
    fn roadmap_orders_weeks_and_alternates_kinds() {
        let report = analyze_skill_gap("Frontend Developer", &skills(&["React", "CSS"]));
        // missing: TypeScript, HTML, Git, Responsive Design, REST APIs
        assert_eq!(report.roadmap.len(), 5);
        let weeks: Vec<u32> = report.roadmap.iter().map(|s| s.week).collect();
        assert_eq!(weeks, vec![1, 2, 3, 4, 5]);
        assert_eq!(report.roadmap[0].kind, RoadmapKind::Course);
        assert_eq!(report.roadmap[1].kind, RoadmapKind::Project);
        assert_eq!(report.roadmap[2].kind, RoadmapKind::Course);
        assert_eq!(report.roadmap[4].kind, RoadmapKind::Certification);
        assert_eq!(report.roadmap[0].resource, "TypeScript Handbook (typescriptlang.org)");
        assert_eq!(report.roadmap[2].resource, FALLBACK_RESOURCE);
    }

    #[test]
    fn single_gap_becomes_a_certification_step() {
        let report = analyze_skill_gap(
            "Frontend Developer",
            &skills(&["React", "TypeScript", "CSS", "HTML", "Git", "Responsive Design"]),
        );
        assert_eq!(report.missing_skills, vec!["REST APIs"]);
        assert_eq!(report.roadmap[0].kind, RoadmapKind::Certification);
    }

    #[test]
    fn substring_matching_is_literal_in_both_directions() {
        // "postgresql" contains "sql", so the SQL requirement is satisfied
        let report = analyze_skill_gap("Backend Developer", &skills(&["PostgreSQL"]));
        assert!(report.present_skills.iter().any(|s| s == "SQL"));

        // but it does not contain "mongodb/postgresql", so that stays missing
        let report = analyze_skill_gap("Full Stack Developer", &skills(&["PostgreSQL"]));
        assert!(report.missing_skills.iter().any(|s| s == "MongoDB/PostgreSQL"));
    }

    #[test]
    fn unknown_role_yields_empty_sets_not_an_error() {
        let report = analyze_skill_gap("Astronaut", &skills(&["Piloting"]));
        assert!(report.missing_skills.is_empty());
        assert!(report.present_skills.is_empty());
        assert!(report.roadmap.is_empty());
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn recommendations_name_the_top_gaps_and_role() {
        let report = analyze_skill_gap("Frontend Developer", &skills(&["React", "CSS"]));
        assert_eq!(
            report.recommendations[0],
            "Focus on TypeScript and HTML first — highest demand for Frontend Developer."
        );
        assert!(report.recommendations[3].contains("Frontend Developer-specific certification"));
    }

    #[test]
    fn identical_inputs_give_identical_reports() {
        let a = analyze_skill_gap("Data Scientist", &skills(&["Python", "SQL"]));
        let b = analyze_skill_gap("Data Scientist", &skills(&["Python", "SQL"]));
        assert_eq!(a, b);
    }
}
