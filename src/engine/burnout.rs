use serde::{Deserialize, Serialize};

/// Averaged or single-day wellness inputs. Ranges (1-10 ratings, 0-24 hours)
/// are enforced by the caller; the predictor is total over its domain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WellnessSignal {
    pub stress: f64,
    pub mood: f64,
    pub sleep_hours: f64,
    pub study_hours: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk – You're on track",
            RiskTier::Moderate => "Moderate Risk – Monitor closely",
            RiskTier::High => "High Risk – Rest is priority",
        }
    }

    fn suggestions(&self) -> &'static [&'static str] {
        match self {
            RiskTier::Low => &[
                "Keep up your good habits! Maintain 7-8 hours of sleep.",
                "Try a 10-minute mindfulness session to stay sharp.",
                "Your current pace is sustainable — great work!",
            ],
            RiskTier::Moderate => &[
                "Consider reducing study hours by 1-2 hours/day.",
                "Take a 30-minute break every 90 minutes of study.",
                "Practice deep breathing to lower stress.",
                "Speak with your mentor about workload adjustment.",
            ],
            RiskTier::High => &[
                "🚨 High burnout risk detected! Please reduce workload immediately.",
                "Take at least 1 rest day this week.",
                "Reach out to your mentor or counselor today.",
                "Sleep 8+ hours for the next 3 days.",
                "Avoid mock tests until your stress drops below 5.",
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BurnoutAssessment {
    pub score: u8,
    pub risk: RiskTier,
    pub label: String,
    pub suggestions: Vec<String>,
}

/// Weighted linear burnout score. Stress carries 40 points, sleep deficit 30,
/// study overload 20, low mood 10; the sum is rounded and capped at 100.
pub fn predict_burnout(signal: &WellnessSignal) -> BurnoutAssessment {
    let stress_component = (signal.stress / 10.0) * 40.0;
    let sleep_component = if signal.sleep_hours < 6.0 {
        30.0
    } else if signal.sleep_hours < 7.0 {
        15.0
    } else {
        0.0
    };
    let study_component = if signal.study_hours > 10.0 {
        20.0
    } else if signal.study_hours > 8.0 {
        10.0
    } else {
        0.0
    };
    let mood_component = ((10.0 - signal.mood) / 10.0) * 10.0;

    let raw = stress_component + sleep_component + study_component + mood_component;
    let score = raw.round().min(100.0) as u8;

    let risk = if score < 35 {
        RiskTier::Low
    } else if score < 65 {
        RiskTier::Moderate
    } else {
        RiskTier::High
    };

    BurnoutAssessment {
        score,
        risk,
        label: risk.label().to_string(),
        suggestions: risk.suggestions().iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(stress: f64, mood: f64, sleep: f64, study: f64) -> WellnessSignal {
        WellnessSignal {
            stress,
            mood,
            sleep_hours: sleep,
            study_hours: study,
        }
    }

    #[test]
    fn worst_case_inputs_max_out_the_formula() {
        let assessment = predict_burnout(&signal(10.0, 1.0, 4.0, 12.0));
        assert_eq!(assessment.score, 99);
        assert_eq!(assessment.risk, RiskTier::High);
    }

    #[test]
    fn clamp_engages_below_declared_mood_range() {
        let assessment = predict_burnout(&signal(10.0, 0.0, 4.0, 12.0));
        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.risk, RiskTier::High);
    }

    #[test]
    fn best_case_inputs_score_near_zero() {
        let assessment = predict_burnout(&signal(1.0, 10.0, 8.0, 5.0));
        assert_eq!(assessment.score, 4);
        assert_eq!(assessment.risk, RiskTier::Low);
    }

    #[test]
    fn risk_tiers_resolve_upward_at_boundaries() {
        // 4*stress + (10 - mood) with sleep and study in the neutral bands
        assert_eq!(predict_burnout(&signal(7.0, 4.0, 8.0, 5.0)).score, 34);
        assert_eq!(predict_burnout(&signal(7.0, 4.0, 8.0, 5.0)).risk, RiskTier::Low);
        assert_eq!(predict_burnout(&signal(7.0, 3.0, 8.0, 5.0)).score, 35);
        assert_eq!(predict_burnout(&signal(7.0, 3.0, 8.0, 5.0)).risk, RiskTier::Moderate);
        // 32 + 15 + 10 + (10 - mood)
        assert_eq!(predict_burnout(&signal(8.0, 3.0, 6.5, 9.0)).score, 64);
        assert_eq!(predict_burnout(&signal(8.0, 3.0, 6.5, 9.0)).risk, RiskTier::Moderate);
        assert_eq!(predict_burnout(&signal(8.0, 2.0, 6.5, 9.0)).score, 65);
        assert_eq!(predict_burnout(&signal(8.0, 2.0, 6.5, 9.0)).risk, RiskTier::High);
    }

    #[test]
    fn sleep_and_study_tiers_step_at_documented_thresholds() {
        let base = predict_burnout(&signal(5.0, 5.0, 7.0, 8.0)).score;
        assert_eq!(predict_burnout(&signal(5.0, 5.0, 6.9, 8.0)).score, base + 15);
        assert_eq!(predict_burnout(&signal(5.0, 5.0, 5.9, 8.0)).score, base + 30);
        assert_eq!(predict_burnout(&signal(5.0, 5.0, 7.0, 8.1)).score, base + 10);
        assert_eq!(predict_burnout(&signal(5.0, 5.0, 7.0, 10.1)).score, base + 20);
    }

    #[test]
    fn suggestions_and_label_track_the_tier() {
        let high = predict_burnout(&signal(10.0, 1.0, 4.0, 12.0));
        assert_eq!(high.suggestions.len(), 5);
        assert!(high.label.starts_with("High Risk"));

        let low = predict_burnout(&signal(1.0, 10.0, 8.0, 5.0));
        assert_eq!(low.suggestions.len(), 3);
        assert!(low.label.starts_with("Low Risk"));
    }

    #[test]
    fn identical_inputs_give_identical_assessments() {
        let a = predict_burnout(&signal(6.0, 4.0, 6.2, 9.5));
        let b = predict_burnout(&signal(6.0, 4.0, 6.2, 9.5));
        assert_eq!(a, b);
    }
}
