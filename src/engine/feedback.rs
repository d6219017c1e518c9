use serde::{Deserialize, Serialize};

const STRESS_KEYWORDS: [&str; 8] = [
    "overwhelmed",
    "stressed",
    "anxious",
    "too much",
    "burnout",
    "tired",
    "exhausted",
    "difficult",
];

const POSITIVE_KEYWORDS: [&str; 8] = [
    "great",
    "good",
    "excellent",
    "improving",
    "confident",
    "enjoying",
    "productive",
    "motivated",
];

const DIFFICULTY_KEYWORDS: [&str; 7] = [
    "hard",
    "confusing",
    "unclear",
    "struggling",
    "difficult",
    "complex",
    "lost",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    fn recommendations(&self) -> &'static [&'static str] {
        match self {
            Sentiment::Negative => &[
                "Consider a mentor session this week.",
                "Reduce study intensity temporarily.",
                "Practice stress-relief exercises daily.",
            ],
            Sentiment::Neutral => &[
                "Stay consistent — small improvements add up.",
                "Set 1 clear goal for next week.",
            ],
            Sentiment::Positive => &[
                "Excellent momentum! Challenge yourself with an advanced topic.",
                "Consider mentoring a peer to solidify your knowledge.",
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackAnalysis {
    pub sentiment: Sentiment,
    pub key_themes: Vec<String>,
    pub recommendations: Vec<String>,
    /// Keyword density heuristic, not a probability. Short texts with several
    /// keyword hits push it past 1.0.
    pub confidence_score: f64,
}

/// Classify free-text feedback against a satisfaction rating using fixed
/// keyword lists matched by lowercase substring search.
pub fn analyze_feedback(text: &str, satisfaction_score: f64) -> FeedbackAnalysis {
    let lower = text.to_lowercase();
    let hits = |keywords: &[&str]| keywords.iter().filter(|k| lower.contains(*k)).count();
    let stress_hits = hits(&STRESS_KEYWORDS);
    let positive_hits = hits(&POSITIVE_KEYWORDS);
    let difficulty_hits = hits(&DIFFICULTY_KEYWORDS);

    let sentiment = if satisfaction_score >= 7.0 && positive_hits > stress_hits {
        Sentiment::Positive
    } else if satisfaction_score <= 4.0 || stress_hits > positive_hits {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    let mut key_themes = Vec::new();
    if stress_hits > 0 {
        key_themes.push("Stress & Anxiety".to_string());
    }
    if difficulty_hits > 0 {
        key_themes.push("Content Difficulty".to_string());
    }
    if positive_hits > 0 {
        key_themes.push("Positive Progress".to_string());
    }
    if lower.contains("mentor") || lower.contains("support") {
        key_themes.push("Mentor Support".to_string());
    }
    if key_themes.is_empty() {
        key_themes.push("General Feedback".to_string());
    }

    // Space-separated segments, so empty text still counts one word.
    let word_count = text.split(' ').count();
    let total_hits = (positive_hits + stress_hits + difficulty_hits) as f64;
    let confidence_score = (total_hits / (word_count as f64 / 10.0) * 100.0).round() / 100.0;

    FeedbackAnalysis {
        sentiment,
        key_themes,
        recommendations: sentiment
            .recommendations()
            .iter()
            .map(|s| s.to_string())
            .collect(),
        confidence_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_satisfaction_with_stress_language_is_negative() {
        let analysis = analyze_feedback("I feel completely overwhelmed and exhausted", 3.0);
        assert_eq!(analysis.sentiment, Sentiment::Negative);
        assert!(analysis.key_themes.iter().any(|t| t == "Stress & Anxiety"));
        // 2 hits over 6 words
        assert!((analysis.confidence_score - 3.33).abs() < 1e-9);
    }

    #[test]
    fn high_satisfaction_with_positive_language_is_positive() {
        let analysis =
            analyze_feedback("This has been great, I'm really confident and productive", 9.0);
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert!(analysis.key_themes.iter().any(|t| t == "Positive Progress"));
        assert_eq!(analysis.recommendations.len(), 2);
    }

    #[test]
    fn high_satisfaction_without_positive_language_stays_neutral() {
        let analysis = analyze_feedback("The pace this week was fine", 8.0);
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        assert_eq!(analysis.key_themes, vec!["General Feedback"]);
        assert_eq!(analysis.confidence_score, 0.0);
    }

    #[test]
    fn stress_majority_overrides_decent_satisfaction() {
        let analysis = analyze_feedback("Tired and stressed, though the content is good", 6.0);
        // two stress hits against one positive hit
        assert_eq!(analysis.sentiment, Sentiment::Negative);
    }

    #[test]
    fn mentor_mentions_surface_the_support_theme() {
        let analysis = analyze_feedback("My mentor has been checking in weekly", 6.0);
        assert!(analysis.key_themes.iter().any(|t| t == "Mentor Support"));
    }

    #[test]
    fn difficult_counts_toward_both_stress_and_difficulty() {
        let analysis = analyze_feedback("This topic is difficult", 5.0);
        assert!(analysis.key_themes.iter().any(|t| t == "Stress & Anxiety"));
        assert!(analysis.key_themes.iter().any(|t| t == "Content Difficulty"));
        // 2 hits over 4 words
        assert!((analysis.confidence_score - 5.0).abs() < 1e-9);
        // one stress hit vs zero positive hits
        assert_eq!(analysis.sentiment, Sentiment::Negative);
    }

    #[test]
    fn empty_text_is_total() {
        let analysis = analyze_feedback("", 5.0);
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
        assert_eq!(analysis.key_themes, vec!["General Feedback"]);
        assert_eq!(analysis.confidence_score, 0.0);
    }

    #[test]
    fn confidence_is_unbounded_for_keyword_dense_text() {
        let analysis = analyze_feedback("overwhelmed exhausted", 5.0);
        // 2 hits over 2 words: 2 / 0.2 = 10.0
        assert!(analysis.confidence_score > 1.0);
        assert!((analysis.confidence_score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn identical_inputs_give_identical_analyses() {
        let a = analyze_feedback("struggling but improving with mentor support", 6.0);
        let b = analyze_feedback("struggling but improving with mentor support", 6.0);
        assert_eq!(a, b);
    }
}
