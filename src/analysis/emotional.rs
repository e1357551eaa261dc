//! Mood/food co-occurrence.
//!
//! Two passes over the same window:
//! - logged mood -> food: meals whose linked mood was recorded within the
//!   proximity window, grouped by mood label;
//! - food -> predicted mood: meals carrying a predicted post-meal mood,
//!   grouped by food item and, separately, by category.
//!
//! Groups keep first-seen order so output is deterministic.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::analysis::config::{AnalysisConfig, MoodPolarity};
use crate::analysis::patterns::{
    mood_context, DetectedPattern, FoodMoodLink, PatternKind, SubjectKind,
};
use crate::meals::{MealRecord, MoodLabel};

/// Insertion-ordered map; small enough that a side index is all it needs.
#[derive(Debug)]
struct OrderedMap<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V: Default> OrderedMap<K, V> {
    fn entry(&mut self, key: K) -> &mut V {
        let slot = match self.index.get(&key).copied() {
            Some(slot) => slot,
            None => {
                self.entries.push((key.clone(), V::default()));
                self.index.insert(key, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[slot].1
    }

    fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Eq + Hash + Clone> OrderedMap<K, usize> {
    fn increment(&mut self, key: K) {
        *self.entry(key) += 1;
    }

    /// Highest count; ties go to the key seen first.
    fn top(&self) -> Option<(&K, usize)> {
        self.entries
            .iter()
            .fold(None, |best: Option<(&K, usize)>, (key, count)| match best {
                Some((_, best_count)) if best_count >= *count => best,
                _ => Some((key, *count)),
            })
    }
}

#[derive(Debug, Default)]
struct MoodGroup {
    total: usize,
    foods: OrderedMap<String, usize>,
    categories: OrderedMap<String, usize>,
}

#[derive(Debug, Default)]
struct PredictionGroup {
    total: usize,
    moods: OrderedMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FoodSubject {
    kind: SubjectKind,
    name: String,
}

fn clears(count: usize, total: usize, min_occurrences: usize, ratio: f64) -> bool {
    total > 0 && count >= min_occurrences && count as f64 / total as f64 >= ratio
}

/// Known labels are canonicalized ("sad" -> "Sad"); anything else is kept trimmed.
fn canonical_mood(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(
        trimmed
            .parse::<MoodLabel>()
            .map(|label| label.to_string())
            .unwrap_or_else(|_| trimmed.to_string()),
    )
}

pub fn detect_emotional_eating(meals: &[MealRecord], cfg: &AnalysisConfig) -> Vec<DetectedPattern> {
    let mut by_mood: OrderedMap<MoodLabel, MoodGroup> = OrderedMap::default();
    let mut by_subject: OrderedMap<FoodSubject, PredictionGroup> = OrderedMap::default();

    for meal in meals {
        let food = meal.food_label();
        let category = meal.resolved_category();

        if let Some(mood) = &meal.mood {
            if (mood.created_at - meal.created_at).abs() <= cfg.mood_proximity {
                let group = by_mood.entry(mood.label);
                group.total += 1;
                group.foods.increment(food.to_string());
                group.categories.increment(category.to_string());
            }
        }

        if let Some(predicted) = meal.predicted_mood.as_deref().and_then(canonical_mood) {
            let subjects = [
                FoodSubject {
                    kind: SubjectKind::FoodItem,
                    name: food.to_string(),
                },
                FoodSubject {
                    kind: SubjectKind::Category,
                    name: category.to_string(),
                },
            ];
            for subject in subjects {
                let group = by_subject.entry(subject);
                group.total += 1;
                group.moods.increment(predicted.clone());
            }
        }
    }

    let mut patterns = Vec::new();
    for (mood, group) in by_mood.iter() {
        logged_mood_patterns(*mood, group, cfg, &mut patterns);
    }
    for (subject, group) in by_subject.iter() {
        if let Some(pattern) = predicted_mood_pattern(subject, group, cfg) {
            patterns.push(pattern);
        }
    }

    debug!(
        mood_groups = by_mood.entries.len(),
        subject_groups = by_subject.entries.len(),
        emitted = patterns.len(),
        "emotional eating"
    );
    patterns
}

fn logged_mood_patterns(
    mood: MoodLabel,
    group: &MoodGroup,
    cfg: &AnalysisConfig,
    out: &mut Vec<DetectedPattern>,
) {
    if group.total < cfg.min_occurrences {
        return;
    }

    let polarity = cfg.polarity(mood);
    let context = mood_context(polarity, mood);

    for (food, count) in group.foods.iter() {
        if !clears(*count, group.total, cfg.min_occurrences, cfg.specific_food_ratio) {
            continue;
        }
        out.push(DetectedPattern::new(
            format!("Potential Link: {context} and Consumption of {food}"),
            PatternKind::LoggedMoodSpecificFood {
                mood,
                polarity,
                food: food.clone(),
                count: *count,
                total: group.total,
            },
            format!(
                "When {} was logged near a meal, '{food}' was consumed in {count} of {} such instances.",
                context.to_lowercase(),
                group.total
            ),
        ));
    }

    if polarity != MoodPolarity::Negative {
        return;
    }

    let mut comfort: OrderedMap<String, usize> = OrderedMap::default();
    for (category, count) in group.categories.iter() {
        if cfg.is_comfort_category(category) {
            *comfort.entry(category.clone()) += *count;
        }
    }
    let comfort_count: usize = comfort.iter().map(|(_, count)| *count).sum();
    if !clears(comfort_count, group.total, cfg.min_occurrences, cfg.cooccurrence_ratio) {
        return;
    }
    let Some((category, _)) = comfort.top() else {
        return;
    };

    out.push(DetectedPattern::new(
        format!("Emotional Eating: {context} and {category}"),
        PatternKind::EmotionalEatingCategoryLogged {
            mood,
            category: category.clone(),
            count: comfort_count,
            total: group.total,
        },
        format!(
            "When {} was logged near a meal, comfort foods were consumed in {comfort_count} of {} such instances, most often from the '{category}' category.",
            context.to_lowercase(),
            group.total
        ),
    ));
}

fn predicted_mood_pattern(
    subject: &FoodSubject,
    group: &PredictionGroup,
    cfg: &AnalysisConfig,
) -> Option<DetectedPattern> {
    if group.total < cfg.min_occurrences {
        return None;
    }

    let (raw_mood, count) = group.moods.top()?;
    if !clears(count, group.total, cfg.min_occurrences, cfg.cooccurrence_ratio) {
        return None;
    }
    // labels outside the closed set are counted but never reported
    let mood = raw_mood.parse::<MoodLabel>().ok()?;
    let polarity = cfg.polarity(mood);

    let link = FoodMoodLink {
        subject: subject.name.clone(),
        subject_kind: subject.kind,
        mood,
        count,
        total: group.total,
    };
    let (direction, kind) = match polarity {
        MoodPolarity::Negative => ("Negative", PatternKind::FoodPredictedNegativeMood(link)),
        MoodPolarity::Positive => ("Positive", PatternKind::FoodPredictedPositiveMood(link)),
        MoodPolarity::Neutral => return None,
    };

    let kind_label = subject.kind.label();
    Some(DetectedPattern::new(
        format!(
            "Pattern: Consumption of {} ({kind_label}) and Predicted {direction} Mood ({mood})",
            subject.name
        ),
        kind,
        format!(
            "Consuming '{}' was followed by a predicted mood of '{mood}' in {count} of {} instances where this {kind_label} was logged with a prediction.",
            subject.name, group.total
        ),
    ))
}
