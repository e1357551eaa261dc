//! Detected pattern taxonomy.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::config::MoodPolarity;
use crate::meals::MoodLabel;

/// Whether a correlation group was keyed by a food item or by its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    FoodItem,
    Category,
}

impl SubjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            SubjectKind::FoodItem => "food item",
            SubjectKind::Category => "category",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A food (or category) whose meals were usually followed by one predicted mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodMoodLink {
    pub subject: String,
    pub subject_kind: SubjectKind,
    pub mood: MoodLabel,
    pub count: usize,
    pub total: usize,
}

/// Typed payload of a [`DetectedPattern`]; the serde tag is the pattern's `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PatternKind {
    FrequentSnacking {
        average_per_day: f64,
        logging_days: usize,
    },
    SkippingBreakfast {
        skipped_days: usize,
        logged_days: usize,
    },
    HighIntake {
        category: String,
        display_name: String,
        percentage: u32,
    },
    LoggedMoodSpecificFood {
        mood: MoodLabel,
        polarity: MoodPolarity,
        food: String,
        count: usize,
        total: usize,
    },
    EmotionalEatingCategoryLogged {
        mood: MoodLabel,
        category: String,
        count: usize,
        total: usize,
    },
    FoodPredictedNegativeMood(FoodMoodLink),
    FoodPredictedPositiveMood(FoodMoodLink),
    /// Produced outside this engine; rendered with the generic templates.
    #[serde(other)]
    Other,
}

impl PatternKind {
    pub fn type_tag(&self) -> &'static str {
        match self {
            PatternKind::FrequentSnacking { .. } => "frequent_snacking",
            PatternKind::SkippingBreakfast { .. } => "skipping_breakfast",
            PatternKind::HighIntake { .. } => "high_intake",
            PatternKind::LoggedMoodSpecificFood { .. } => "logged_mood_specific_food",
            PatternKind::EmotionalEatingCategoryLogged { .. } => "emotional_eating_category_logged",
            PatternKind::FoodPredictedNegativeMood(_) => "food_predicted_negative_mood",
            PatternKind::FoodPredictedPositiveMood(_) => "food_predicted_positive_mood",
            PatternKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedPattern {
    pub name: String,
    #[serde(flatten)]
    pub kind: PatternKind,
    pub detected: bool,
    pub details: String,
}

impl DetectedPattern {
    pub fn new(name: impl Into<String>, kind: PatternKind, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            detected: true,
            details: details.into(),
        }
    }

    pub fn other(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, PatternKind::Other, details)
    }

    pub fn type_tag(&self) -> &'static str {
        self.kind.type_tag()
    }

    /// Dedup key: type tag plus the parameters that make the pattern distinct.
    pub fn key(&self) -> String {
        let tag = self.type_tag();
        match &self.kind {
            PatternKind::FrequentSnacking { .. } | PatternKind::SkippingBreakfast { .. } => {
                tag.to_string()
            }
            PatternKind::HighIntake { category, .. } => format!("{tag}:{category}"),
            PatternKind::LoggedMoodSpecificFood { mood, food, .. } => {
                format!("{tag}:{mood}:{food}")
            }
            PatternKind::EmotionalEatingCategoryLogged { mood, category, .. } => {
                format!("{tag}:{mood}:{category}")
            }
            PatternKind::FoodPredictedNegativeMood(link)
            | PatternKind::FoodPredictedPositiveMood(link) => format!(
                "{tag}:{}:{}:{}",
                link.subject_kind.label(),
                link.subject,
                link.mood
            ),
            PatternKind::Other => format!("{tag}:{}", self.name),
        }
    }
}

/// "Negative Mood (Sad)" style label for a logged mood.
pub fn mood_context(polarity: MoodPolarity, mood: MoodLabel) -> String {
    format!("{} ({})", polarity.label(), mood)
}

/// Ordered pattern list that drops anything whose key was already emitted.
#[derive(Debug, Default)]
pub struct PatternSet {
    seen: HashSet<String>,
    patterns: Vec<DetectedPattern>,
}

impl PatternSet {
    pub fn push(&mut self, pattern: DetectedPattern) -> bool {
        let key = pattern.key();
        if !self.seen.insert(key.clone()) {
            debug!(%key, "duplicate pattern skipped");
            return false;
        }
        self.patterns.push(pattern);
        true
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn into_patterns(self) -> Vec<DetectedPattern> {
        self.patterns
    }
}

impl Extend<DetectedPattern> for PatternSet {
    fn extend<I: IntoIterator<Item = DetectedPattern>>(&mut self, iter: I) {
        for pattern in iter {
            self.push(pattern);
        }
    }
}

#[cfg(test)]
mod pattern_tests {
    use super::*;

    fn high_intake(category: &str, display_name: &str) -> DetectedPattern {
        DetectedPattern::new(
            format!("High Intake of {display_name}"),
            PatternKind::HighIntake {
                category: category.into(),
                display_name: display_name.into(),
                percentage: 40,
            },
            format!("40% of logged meals included {display_name}."),
        )
    }

    #[test]
    fn serializes_with_type_tag() {
        let value = serde_json::to_value(high_intake("sweets", "Sugary Foods/Snacks")).unwrap();
        assert_eq!(value["type"], "high_intake");
        assert_eq!(value["name"], "High Intake of Sugary Foods/Snacks");
        assert_eq!(value["detected"], true);
        assert_eq!(value["category"], "sweets");
    }

    #[test]
    fn unknown_type_deserializes_as_other() {
        let raw = r#"{"name":"Late Night Eating","type":"late_night","detected":true,"details":"4 meals after 23:00."}"#;
        let pattern: DetectedPattern = serde_json::from_str(raw).unwrap();
        assert_eq!(pattern.kind, PatternKind::Other);
        assert_eq!(pattern.type_tag(), "other");
        assert_eq!(pattern.key(), "other:Late Night Eating");
    }

    #[test]
    fn keys_include_parameters() {
        let link = FoodMoodLink {
            subject: "pizza".into(),
            subject_kind: SubjectKind::FoodItem,
            mood: MoodLabel::Sad,
            count: 3,
            total: 4,
        };
        let pattern = DetectedPattern::new("n", PatternKind::FoodPredictedNegativeMood(link), "d");
        assert_eq!(pattern.key(), "food_predicted_negative_mood:food item:pizza:Sad");
        assert_eq!(
            high_intake("sweets", "Sugary Foods/Snacks").key(),
            "high_intake:sweets"
        );
    }

    #[test]
    fn pattern_set_drops_repeated_keys() {
        let mut set = PatternSet::default();
        assert!(set.push(high_intake("sweets", "Sugary Foods/Snacks")));
        assert!(!set.push(high_intake("sweets", "Sweet Things")));
        assert!(set.push(high_intake("grain_refined", "Refined Grains")));
        assert_eq!(set.len(), 2);
        let names: Vec<_> = set.into_patterns().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["High Intake of Sugary Foods/Snacks", "High Intake of Refined Grains"]
        );
    }

    #[test]
    fn mood_context_label() {
        assert_eq!(
            mood_context(MoodPolarity::Negative, MoodLabel::Sad),
            "Negative Mood (Sad)"
        );
        assert_eq!(
            mood_context(MoodPolarity::Neutral, MoodLabel::Neutral),
            "Other Mood (Neutral)"
        );
    }
}
