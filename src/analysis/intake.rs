use tracing::debug;

use crate::analysis::config::{AnalysisConfig, IntakeRule};
use crate::analysis::patterns::{DetectedPattern, PatternKind};
use crate::meals::MealRecord;

/// Flags `target_category` when its share of all meals is strictly above `threshold`.
pub fn detect_high_intake(
    meals: &[MealRecord],
    target_category: &str,
    display_name: &str,
    threshold: f64,
) -> Option<DetectedPattern> {
    if meals.is_empty() {
        return None;
    }

    let matching = meals
        .iter()
        .filter(|m| m.resolved_category() == target_category)
        .count();
    let share = matching as f64 / meals.len() as f64;
    if share <= threshold {
        return None;
    }

    let percentage = (share * 100.0).round() as u32;
    debug!(category = target_category, matching, percentage, "high intake");
    Some(DetectedPattern::new(
        format!("High Intake of {display_name}"),
        PatternKind::HighIntake {
            category: target_category.to_string(),
            display_name: display_name.to_string(),
            percentage,
        },
        format!("{percentage}% of logged meals included {display_name}."),
    ))
}

pub fn detect_intake_rule(meals: &[MealRecord], rule: &IntakeRule) -> Option<DetectedPattern> {
    detect_high_intake(meals, rule.category, rule.display_name, rule.threshold)
}

/// Sugary foods first, refined grains only if sugar did not trigger.
pub fn analyze_overall_carb_intake(
    meals: &[MealRecord],
    cfg: &AnalysisConfig,
) -> Option<DetectedPattern> {
    detect_intake_rule(meals, &cfg.sugary_foods)
        .or_else(|| detect_intake_rule(meals, &cfg.refined_grains))
}
