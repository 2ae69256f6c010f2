//! Keyword classification of the client's question.
//!
//! Matching is plain substring containment on the lower-cased question, so
//! keywords also fire inside longer words ("network" contains "work",
//! "somebody" contains "body"). Readings have always been categorized this
//! way and the behaviour is kept as is.

use serde::{Deserialize, Serialize};

/// Focus area of a question. Each category carries its own fixed
/// focus-area and cosmic-guidance labels, so the two are always paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Relationships,
    Career,
    Health,
    Family,
    Spiritual,
    General,
}

/// Keyword sets in priority order; the first set with any hit wins.
static CATEGORY_KEYWORDS: [(QuestionCategory, &[&str]); 5] = [
    (
        QuestionCategory::Relationships,
        &["love", "relationship", "partner", "marriage", "dating"],
    ),
    (
        QuestionCategory::Career,
        &["career", "job", "work", "business", "money", "finance"],
    ),
    (
        QuestionCategory::Health,
        &["health", "healing", "wellness", "body", "energy"],
    ),
    (
        QuestionCategory::Family,
        &["family", "home", "parents", "children"],
    ),
    (
        QuestionCategory::Spiritual,
        &["spiritual", "purpose", "meaning", "growth"],
    ),
];

impl QuestionCategory {
    pub fn focus_area(&self) -> &'static str {
        match self {
            QuestionCategory::Relationships => "heart and relationship matters",
            QuestionCategory::Career => "career and material success",
            QuestionCategory::Health => "health and vitality",
            QuestionCategory::Family => "family and home foundations",
            QuestionCategory::Spiritual => "spiritual evolution and life purpose",
            QuestionCategory::General => "general life guidance",
        }
    }

    pub fn cosmic_guidance(&self) -> &'static str {
        match self {
            QuestionCategory::Relationships => "Venus and 7th house influences",
            QuestionCategory::Career => "10th house and Saturn teachings",
            QuestionCategory::Health => "6th house and Mars energy",
            QuestionCategory::Family => "4th house and Moon cycles",
            QuestionCategory::Spiritual => "12th house and Jupiter expansion",
            QuestionCategory::General => "overall birth chart harmony",
        }
    }
}

pub fn categorize(question: &str) -> QuestionCategory {
    let question_lower = question.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|word| question_lower.contains(word)))
        .map(|(category, _)| *category)
        .unwrap_or(QuestionCategory::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_love_outranks_career() {
        let category = categorize("How is my career and love life?");
        assert_eq!(category, QuestionCategory::Relationships);
        assert_eq!(category.focus_area(), "heart and relationship matters");
        assert_eq!(category.cosmic_guidance(), "Venus and 7th house influences");
    }

    #[test]
    fn test_default_pair() {
        let category = categorize("xyz");
        assert_eq!(category.focus_area(), "general life guidance");
        assert_eq!(category.cosmic_guidance(), "overall birth chart harmony");
        assert_eq!(categorize(""), QuestionCategory::General);
    }

    #[test]
    fn test_each_category() {
        assert_eq!(categorize("Should I change my JOB?"), QuestionCategory::Career);
        assert_eq!(categorize("How can I improve my wellness"), QuestionCategory::Health);
        assert_eq!(categorize("Will my parents visit?"), QuestionCategory::Family);
        assert_eq!(categorize("What is my purpose?"), QuestionCategory::Spiritual);
        assert_eq!(categorize("Will I find love?"), QuestionCategory::Relationships);
    }

    #[test]
    fn test_substring_matches_inside_words() {
        assert_eq!(categorize("my network"), QuestionCategory::Career);
        assert_eq!(categorize("somebody help"), QuestionCategory::Health);
        assert_eq!(categorize("a careerist plan"), QuestionCategory::Career);
    }
}
