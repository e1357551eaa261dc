use std::collections::{BTreeMap, HashSet};

use time::Date;
use tracing::debug;

use crate::analysis::config::AnalysisConfig;
use crate::analysis::patterns::{DetectedPattern, PatternKind};
use crate::meals::{MealRecord, MealType};

/// Number of distinct UTC dates with at least one meal.
pub fn distinct_logging_days(meals: &[MealRecord]) -> usize {
    meals.iter().map(MealRecord::logged_on).collect::<HashSet<_>>().len()
}

pub fn detect_frequent_snacking(
    meals: &[MealRecord],
    days_with_logging: usize,
    cfg: &AnalysisConfig,
) -> Option<DetectedPattern> {
    if meals.is_empty() || days_with_logging == 0 {
        return None;
    }

    let snacks = meals
        .iter()
        .filter(|m| m.meal_type == Some(MealType::Snack))
        .count();
    let average = snacks as f64 / days_with_logging as f64;
    if average <= cfg.snacks_per_day {
        return None;
    }

    let average = (average * 10.0).round() / 10.0;
    debug!(snacks, days_with_logging, average, "frequent snacking");
    Some(DetectedPattern::new(
        "Frequent Snacking",
        PatternKind::FrequentSnacking {
            average_per_day: average,
            logging_days: days_with_logging,
        },
        format!(
            "Average of {average:.1} snacks per day over {days_with_logging} day(s) with logs."
        ),
    ))
}

pub fn detect_skipping_breakfast(
    meals: &[MealRecord],
    days_with_logging: usize,
    cfg: &AnalysisConfig,
) -> Option<DetectedPattern> {
    if meals.is_empty() || days_with_logging == 0 {
        return None;
    }

    // date -> had breakfast
    let mut days: BTreeMap<Date, bool> = BTreeMap::new();
    for meal in meals {
        let had_breakfast = days.entry(meal.logged_on()).or_insert(false);
        *had_breakfast |= meal.meal_type == Some(MealType::Breakfast);
    }

    let logged_days = days.len();
    let skipped_days = days.values().filter(|had| !**had).count();
    if skipped_days as f64 <= logged_days as f64 * cfg.breakfast_skip_ratio {
        return None;
    }

    debug!(skipped_days, logged_days, "skipping breakfast");
    Some(DetectedPattern::new(
        "Skipping Breakfast",
        PatternKind::SkippingBreakfast {
            skipped_days,
            logged_days,
        },
        format!("Skipped breakfast on {skipped_days} out of {logged_days} day(s) with logs."),
    ))
}

#[cfg(test)]
mod temporal_tests {
    use super::*;
    use time::macros::datetime;
    use time::{Duration, OffsetDateTime};
    use uuid::Uuid;

    fn meal(meal_type: MealType, at: OffsetDateTime) -> MealRecord {
        MealRecord::new(Uuid::nil(), at).with_meal_type(meal_type)
    }

    fn day(n: i64) -> OffsetDateTime {
        datetime!(2023-01-01 12:00 UTC) + Duration::days(n)
    }

    #[test]
    fn three_snacks_in_one_day_is_frequent() {
        let cfg = AnalysisConfig::default();
        let meals = vec![
            meal(MealType::Snack, day(0)),
            meal(MealType::Snack, day(0)),
            meal(MealType::Snack, day(0)),
        ];
        let pattern = detect_frequent_snacking(&meals, 1, &cfg).expect("detected");
        assert_eq!(pattern.name, "Frequent Snacking");
        assert!(pattern.detected);
        assert_eq!(pattern.type_tag(), "frequent_snacking");
        assert_eq!(
            pattern.details,
            "Average of 3.0 snacks per day over 1 day(s) with logs."
        );
    }

    #[test]
    fn two_snacks_a_day_is_not_frequent() {
        let cfg = AnalysisConfig::default();
        let meals = vec![meal(MealType::Snack, day(0)), meal(MealType::Snack, day(0))];
        assert!(detect_frequent_snacking(&meals, 1, &cfg).is_none());
    }

    #[test]
    fn snacking_average_is_rounded() {
        let cfg = AnalysisConfig::default();
        let meals: Vec<_> = (0..7).map(|_| meal(MealType::Snack, day(0))).collect();
        let pattern = detect_frequent_snacking(&meals, 3, &cfg).expect("7/3 > 2");
        assert_eq!(
            pattern.details,
            "Average of 2.3 snacks per day over 3 day(s) with logs."
        );
    }

    #[test]
    fn snacking_needs_meals_and_days() {
        let cfg = AnalysisConfig::default();
        let snacks = vec![meal(MealType::Snack, day(0)); 3];
        assert!(detect_frequent_snacking(&snacks, 0, &cfg).is_none());
        assert!(detect_frequent_snacking(&[], 1, &cfg).is_none());
        let lunches = vec![meal(MealType::Lunch, day(0)); 3];
        assert!(detect_frequent_snacking(&lunches, 1, &cfg).is_none());
    }

    #[test]
    fn breakfast_skipped_on_three_of_five_days() {
        let cfg = AnalysisConfig::default();
        let meals = vec![
            meal(MealType::Lunch, day(0)),
            meal(MealType::Breakfast, day(1)),
            meal(MealType::Lunch, day(1)),
            meal(MealType::Lunch, day(2)),
            meal(MealType::Breakfast, day(3)),
            meal(MealType::Lunch, day(3)),
            meal(MealType::Lunch, day(4)),
        ];
        let pattern = detect_skipping_breakfast(&meals, 5, &cfg).expect("detected");
        assert_eq!(pattern.name, "Skipping Breakfast");
        assert_eq!(
            pattern.details,
            "Skipped breakfast on 3 out of 5 day(s) with logs."
        );
    }

    #[test]
    fn one_skip_in_five_days_is_fine() {
        let cfg = AnalysisConfig::default();
        let meals = vec![
            meal(MealType::Lunch, day(0)),
            meal(MealType::Breakfast, day(1)),
            meal(MealType::Breakfast, day(2)),
            meal(MealType::Breakfast, day(3)),
            meal(MealType::Breakfast, day(4)),
        ];
        assert!(detect_skipping_breakfast(&meals, 5, &cfg).is_none());
    }

    #[test]
    fn breakfast_days_are_unique_dates() {
        let cfg = AnalysisConfig::default();
        let meals = vec![
            meal(MealType::Lunch, day(0)),
            meal(MealType::Dinner, day(0)),
            meal(MealType::Breakfast, day(1)),
            meal(MealType::Lunch, day(1)),
            meal(MealType::Lunch, day(2)),
        ];
        assert_eq!(distinct_logging_days(&meals), 3);
        let pattern = detect_skipping_breakfast(&meals, 3, &cfg).expect("detected");
        assert_eq!(
            pattern.details,
            "Skipped breakfast on 2 out of 3 day(s) with logs."
        );
    }

    #[test]
    fn breakfast_needs_meals_and_days() {
        let cfg = AnalysisConfig::default();
        assert!(detect_skipping_breakfast(&[], 0, &cfg).is_none());
        assert!(detect_skipping_breakfast(&[], 1, &cfg).is_none());
        let every_day = vec![meal(MealType::Breakfast, day(0)), meal(MealType::Breakfast, day(1))];
        assert!(detect_skipping_breakfast(&every_day, 2, &cfg).is_none());
    }
}
