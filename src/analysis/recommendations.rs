use crate::analysis::config::MoodPolarity;
use crate::analysis::patterns::{mood_context, DetectedPattern, PatternKind};

pub const ALL_CLEAR_RECOMMENDATION: &str = "Continue to focus on balanced meals and mindful eating. Explore new healthy recipes to keep your meals interesting and nutritious!";
pub const NO_ACTIONABLE_RECOMMENDATION: &str =
    "No specific actionable recommendations for this period, but continue your mindful logging!";

pub fn generate_recommendations(patterns: &[DetectedPattern]) -> Vec<String> {
    if patterns.is_empty() {
        return vec![ALL_CLEAR_RECOMMENDATION.to_string()];
    }

    let recommendations: Vec<String> = patterns
        .iter()
        .filter(|p| p.detected)
        .map(|p| format!("{} Based on your logs: {}", advice_for(p), p.details))
        .collect();
    if recommendations.is_empty() {
        return vec![NO_ACTIONABLE_RECOMMENDATION.to_string()];
    }
    recommendations
}

fn advice_for(pattern: &DetectedPattern) -> String {
    match &pattern.kind {
        PatternKind::FrequentSnacking { .. } => "If hunger strikes between meals, try whole food snacks like fruits, nuts, or yogurt. Planning balanced meals can also help reduce the urge for frequent snacking.".to_string(),
        PatternKind::SkippingBreakfast { .. } => "Consider incorporating a quick, nutritious breakfast into your mornings. Even a piece of fruit with some nuts or a simple smoothie can provide a good start.".to_string(),
        PatternKind::HighIntake {
            category,
            display_name,
            ..
        } => format!(
            "For your high intake of {}, consider exploring healthier alternatives or adjusting portion sizes. {}",
            display_name.to_lowercase(),
            swap_hint(category)
        ),
        PatternKind::LoggedMoodSpecificFood {
            mood,
            polarity,
            food,
            ..
        } => format!(
            "When experiencing {}, and you've noticed a link with '{food}', you might explore if this food choice is serving your emotional needs or if other activities or healthier food options could provide comfort.",
            mood_context(*polarity, *mood).to_lowercase()
        ),
        PatternKind::EmotionalEatingCategoryLogged { mood, category, .. } => format!(
            "When {} occurs and you tend to reach for '{category}', try exploring non-food activities you enjoy, such as music or a walk. If choosing food, perhaps a smaller portion or a healthier alternative?",
            mood_context(MoodPolarity::Negative, *mood).to_lowercase()
        ),
        PatternKind::FoodPredictedNegativeMood(link) => format!(
            "Since eating '{}' seems linked to a predicted {} mood, you could experiment with reducing its frequency or portion size. Pairing it with fiber or protein might also help stabilize energy and mood.",
            link.subject,
            link.mood.as_str().to_lowercase()
        ),
        PatternKind::FoodPredictedPositiveMood(link) => format!(
            "It's great that eating '{}' is often followed by a predicted {} mood! Continue enjoying the choices that seem to work well for you.",
            link.subject,
            link.mood.as_str().to_lowercase()
        ),
        PatternKind::Other => format!(
            "For the pattern '{}', consider whether small adjustments could support your wellness goals.",
            pattern.name
        ),
    }
}

fn swap_hint(category: &str) -> &'static str {
    match category {
        "snacks_processed" => "Whole fruits or a handful of nuts make good swaps.",
        "beverage_sugary" => "Water or unsweetened tea make good swaps.",
        "sweets" => "Fresh fruit or plain yogurt can satisfy a sweet tooth.",
        "grain_refined" => "Whole grains like brown rice or oats are a good swap.",
        _ => "Small, steady changes tend to stick.",
    }
}
