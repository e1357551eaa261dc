use crate::analysis::config::MoodPolarity;
use crate::analysis::patterns::{mood_context, DetectedPattern, FoodMoodLink, PatternKind};

pub const ALL_CLEAR_INSIGHT: &str = "Based on your recent logs, no specific dietary patterns requiring immediate attention were flagged. Keep up the mindful logging!";
pub const NO_ACTIONABLE_INSIGHT: &str =
    "No specific actionable patterns detected in this period, but keep logging for more insights!";

/// One sentence per detected pattern, each carrying the pattern's details verbatim.
pub fn generate_insights(patterns: &[DetectedPattern]) -> Vec<String> {
    if patterns.is_empty() {
        return vec![ALL_CLEAR_INSIGHT.to_string()];
    }

    let insights: Vec<String> = patterns
        .iter()
        .filter(|p| p.detected)
        .map(insight_for)
        .collect();
    if insights.is_empty() {
        return vec![NO_ACTIONABLE_INSIGHT.to_string()];
    }
    insights
}

fn insight_for(pattern: &DetectedPattern) -> String {
    let details = &pattern.details;
    match &pattern.kind {
        PatternKind::FrequentSnacking { .. } => format!(
            "Noticed frequent snacking: {details} Consider if these are hunger-driven or if healthier alternatives could be chosen."
        ),
        PatternKind::SkippingBreakfast { .. } => format!(
            "Breakfast was skipped on several days: {details} A balanced breakfast can provide energy for the day."
        ),
        PatternKind::HighIntake { display_name, .. } => format!(
            "Noticed a high intake of {}: {details} Reflect on how this aligns with your dietary goals.",
            display_name.to_lowercase()
        ),
        PatternKind::LoggedMoodSpecificFood {
            mood,
            polarity,
            food,
            ..
        } => format!(
            "We've observed a potential link between {} and eating '{food}'. {details} Understanding these connections can be a first step towards mindful eating.",
            mood_context(*polarity, *mood).to_lowercase()
        ),
        PatternKind::EmotionalEatingCategoryLogged { mood, category, .. } => format!(
            "It seems there's a pattern of reaching for '{category}' foods during {}. {details} Recognizing this can help in finding alternative coping strategies or healthier comfort options.",
            mood_context(MoodPolarity::Negative, *mood).to_lowercase()
        ),
        PatternKind::FoodPredictedNegativeMood(link) => format!(
            "Our analysis suggests a pattern: {}. {details} This could be due to various factors like energy crashes or specific ingredients.",
            describe_link(link, "negative")
        ),
        PatternKind::FoodPredictedPositiveMood(link) => format!(
            "We found a positive pattern: {}. {details} It's great to see what foods might be contributing to positive feelings post-meal!",
            describe_link(link, "positive")
        ),
        PatternKind::Other => format!("A pattern regarding '{}' was noted: {details}.", pattern.name),
    }
}

fn describe_link(link: &FoodMoodLink, direction: &str) -> String {
    format!(
        "eating '{}' ({}) tends to be followed by a predicted {direction} mood ({})",
        link.subject, link.subject_kind, link.mood
    )
}

#[cfg(test)]
mod insight_tests {
    use super::*;
    use crate::analysis::patterns::SubjectKind;
    use crate::meals::MoodLabel;

    #[test]
    fn empty_input_is_all_clear() {
        assert_eq!(generate_insights(&[]), vec![ALL_CLEAR_INSIGHT.to_string()]);
    }

    #[test]
    fn undetected_patterns_only() {
        let mut pattern = DetectedPattern::other("Late Night Eating", "4 meals after 23:00.");
        pattern.detected = false;
        assert_eq!(
            generate_insights(&[pattern]),
            vec![NO_ACTIONABLE_INSIGHT.to_string()]
        );
    }

    #[test]
    fn unknown_kinds_use_fallback() {
        let pattern = DetectedPattern::other("Late Night Eating", "4 meals after 23:00");
        assert_eq!(
            generate_insights(&[pattern]),
            vec!["A pattern regarding 'Late Night Eating' was noted: 4 meals after 23:00.".to_string()]
        );
    }

    #[test]
    fn typed_fields_drive_the_text() {
        let link = FoodMoodLink {
            subject: "sweets".into(),
            subject_kind: SubjectKind::Category,
            mood: MoodLabel::Anxious,
            count: 3,
            total: 4,
        };
        let pattern = DetectedPattern::new(
            "any display name",
            PatternKind::FoodPredictedNegativeMood(link),
            "Consuming 'sweets' was followed by a predicted mood of 'Anxious' in 3 of 4 instances where this category was logged with a prediction.",
        );
        let insights = generate_insights(std::slice::from_ref(&pattern));
        assert_eq!(insights.len(), 1);
        assert!(insights[0].starts_with(
            "Our analysis suggests a pattern: eating 'sweets' (category) tends to be followed by a predicted negative mood (Anxious)."
        ));
        assert!(insights[0].contains(&pattern.details));
    }

    #[test]
    fn one_sentence_per_detected_pattern() {
        let patterns = vec![
            DetectedPattern::new(
                "Frequent Snacking",
                PatternKind::FrequentSnacking {
                    average_per_day: 3.0,
                    logging_days: 1,
                },
                "Average of 3.0 snacks per day over 1 day(s) with logs.",
            ),
            DetectedPattern::new(
                "Emotional Eating: Negative Mood (Sad) and sweets",
                PatternKind::EmotionalEatingCategoryLogged {
                    mood: MoodLabel::Sad,
                    category: "sweets".into(),
                    count: 3,
                    total: 3,
                },
                "When negative mood (sad) was logged near a meal, comfort foods were consumed in 3 of 3 such instances, most often from the 'sweets' category.",
            ),
        ];
        let insights = generate_insights(&patterns);
        assert_eq!(insights.len(), 2);
        assert_eq!(
            insights[0],
            "Noticed frequent snacking: Average of 3.0 snacks per day over 1 day(s) with logs. Consider if these are hunger-driven or if healthier alternatives could be chosen."
        );
        assert!(insights[1].starts_with(
            "It seems there's a pattern of reaching for 'sweets' foods during negative mood (sad)."
        ));
    }
}
