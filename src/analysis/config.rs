//! Thresholds and closed sets the detectors run against.

use serde::{Deserialize, Serialize};
use time::Duration;

use crate::meals::MoodLabel;

pub const SNACKS_PER_DAY_THRESHOLD: f64 = 2.0;
pub const BREAKFAST_SKIP_RATIO: f64 = 0.4;

pub const MIN_LOGGING_DAYS: usize = 5;
pub const MIN_TOTAL_MEALS: usize = 10;

pub const PROCESSED_SNACKS_THRESHOLD: f64 = 0.15;
pub const SUGARY_BEVERAGES_THRESHOLD: f64 = 0.10;
pub const SUGARY_FOODS_THRESHOLD: f64 = 0.2;
pub const REFINED_GRAINS_THRESHOLD: f64 = 0.3;

pub const MIN_OCCURRENCES: usize = 3;
pub const SIGNIFICANT_COOCCURRENCE: f64 = 0.5;
/// Specific foods are judged against half the category ratio.
pub const SPECIFIC_FOOD_COOCCURRENCE: f64 = SIGNIFICANT_COOCCURRENCE / 2.0;
pub const MOOD_PROXIMITY_HOURS: i64 = 3;

pub const NEGATIVE_MOODS: &[MoodLabel] = &[MoodLabel::Frustrated, MoodLabel::Sad, MoodLabel::Anxious];
pub const POSITIVE_MOODS: &[MoodLabel] = &[MoodLabel::Happy, MoodLabel::Grateful];
pub const COMFORT_CATEGORIES: &[&str] = &["sweets", "snacks_processed"];

/// Which side of the mood scale a label falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodPolarity {
    Negative,
    Positive,
    Neutral,
}

impl MoodPolarity {
    /// Prefix used in pattern names, e.g. "Negative Mood".
    pub fn label(&self) -> &'static str {
        match self {
            MoodPolarity::Negative => "Negative Mood",
            MoodPolarity::Positive => "Positive Mood",
            MoodPolarity::Neutral => "Other Mood",
        }
    }
}

/// A category over-representation check.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeRule {
    pub category: &'static str,
    pub display_name: &'static str,
    pub threshold: f64,
}

/// Immutable engine configuration, built once and shared by every analysis.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub snacks_per_day: f64,
    pub breakfast_skip_ratio: f64,
    pub min_logging_days: usize,
    pub min_total_meals: usize,
    pub processed_snacks: IntakeRule,
    pub sugary_beverages: IntakeRule,
    pub sugary_foods: IntakeRule,
    pub refined_grains: IntakeRule,
    pub min_occurrences: usize,
    pub cooccurrence_ratio: f64,
    pub specific_food_ratio: f64,
    pub mood_proximity: Duration,
    pub negative_moods: &'static [MoodLabel],
    pub positive_moods: &'static [MoodLabel],
    pub comfort_categories: &'static [&'static str],
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            snacks_per_day: SNACKS_PER_DAY_THRESHOLD,
            breakfast_skip_ratio: BREAKFAST_SKIP_RATIO,
            min_logging_days: MIN_LOGGING_DAYS,
            min_total_meals: MIN_TOTAL_MEALS,
            processed_snacks: IntakeRule {
                category: "snacks_processed",
                display_name: "Processed Snacks",
                threshold: PROCESSED_SNACKS_THRESHOLD,
            },
            sugary_beverages: IntakeRule {
                category: "beverage_sugary",
                display_name: "Sugary Beverages",
                threshold: SUGARY_BEVERAGES_THRESHOLD,
            },
            sugary_foods: IntakeRule {
                category: "sweets",
                display_name: "Sugary Foods/Snacks",
                threshold: SUGARY_FOODS_THRESHOLD,
            },
            refined_grains: IntakeRule {
                category: "grain_refined",
                display_name: "Refined Grains",
                threshold: REFINED_GRAINS_THRESHOLD,
            },
            min_occurrences: MIN_OCCURRENCES,
            cooccurrence_ratio: SIGNIFICANT_COOCCURRENCE,
            specific_food_ratio: SPECIFIC_FOOD_COOCCURRENCE,
            mood_proximity: Duration::hours(MOOD_PROXIMITY_HOURS),
            negative_moods: NEGATIVE_MOODS,
            positive_moods: POSITIVE_MOODS,
            comfort_categories: COMFORT_CATEGORIES,
        }
    }
}

impl AnalysisConfig {
    pub fn polarity(&self, mood: MoodLabel) -> MoodPolarity {
        if self.negative_moods.contains(&mood) {
            MoodPolarity::Negative
        } else if self.positive_moods.contains(&mood) {
            MoodPolarity::Positive
        } else {
            MoodPolarity::Neutral
        }
    }

    pub fn is_comfort_category(&self, category: &str) -> bool {
        self.comfort_categories.iter().any(|c| *c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_polarity_follows_closed_sets() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.polarity(MoodLabel::Sad), MoodPolarity::Negative);
        assert_eq!(cfg.polarity(MoodLabel::Frustrated), MoodPolarity::Negative);
        assert_eq!(cfg.polarity(MoodLabel::Grateful), MoodPolarity::Positive);
        assert_eq!(cfg.polarity(MoodLabel::Neutral), MoodPolarity::Neutral);
    }

    #[test]
    fn comfort_categories() {
        let cfg = AnalysisConfig::default();
        assert!(cfg.is_comfort_category("sweets"));
        assert!(cfg.is_comfort_category("snacks_processed"));
        assert!(!cfg.is_comfort_category("fruit"));
    }
}
