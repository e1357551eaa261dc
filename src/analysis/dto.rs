use serde::Serialize;

use crate::analysis::config::AnalysisConfig;
use crate::analysis::insights::generate_insights;
use crate::analysis::patterns::DetectedPattern;
use crate::analysis::recommendations::generate_recommendations;

pub const FETCH_FAILED_ERROR: &str = "Failed to analyze dietary patterns due to a server error.";

/// Which of the result variants an [`AnalysisResult`] represents. Not serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisStatus {
    #[default]
    Complete,
    NoData,
    InsufficientData,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub patterns: Vec<DetectedPattern>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    pub status: AnalysisStatus,
}

impl AnalysisResult {
    pub fn complete(patterns: Vec<DetectedPattern>) -> Self {
        Self {
            insights: generate_insights(&patterns),
            recommendations: generate_recommendations(&patterns),
            patterns,
            ..Default::default()
        }
    }

    pub fn no_data() -> Self {
        Self {
            insights: vec![
                "No meal data found for the selected period. Start logging your meals to get an analysis."
                    .into(),
            ],
            recommendations: vec!["Log your meals and moods regularly to get started.".into()],
            summary: Some("No meal data found for the selected period.".into()),
            status: AnalysisStatus::NoData,
            ..Default::default()
        }
    }

    pub fn insufficient_data(days_with_logging: usize, total_meals: usize, cfg: &AnalysisConfig) -> Self {
        let (min_days, min_meals) = (cfg.min_logging_days, cfg.min_total_meals);
        Self {
            insights: vec![format!(
                "Log meals and moods for at least {min_days} different days (or a total of {min_meals} meals) to receive personalized dietary patterns and insights. You currently have {days_with_logging} day(s) with logs and {total_meals} total meals."
            )],
            recommendations: vec![
                "Continue logging your meals and moods regularly to unlock your personalized analysis."
                    .into(),
            ],
            summary: Some(format!(
                "Insufficient data for full analysis. Please log for at least {min_days} days or {min_meals} meals. You currently have {days_with_logging} day(s) with logs and {total_meals} total meals."
            )),
            status: AnalysisStatus::InsufficientData,
            ..Default::default()
        }
    }

    pub fn failed() -> Self {
        Self {
            insights: generate_insights(&[]),
            recommendations: generate_recommendations(&[]),
            error: Some(FETCH_FAILED_ERROR.into()),
            status: AnalysisStatus::Failed,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod result_tests {
    use super::*;

    #[test]
    fn optional_fields_are_omitted() {
        let value = serde_json::to_value(AnalysisResult::complete(Vec::new())).unwrap();
        assert!(value.get("summary").is_none());
        assert!(value.get("error").is_none());
        assert!(value.get("status").is_none());
        assert_eq!(value["patterns"], serde_json::json!([]));
    }

    #[test]
    fn insufficient_data_reports_counts() {
        let result = AnalysisResult::insufficient_data(4, 6, &AnalysisConfig::default());
        assert_eq!(result.status, AnalysisStatus::InsufficientData);
        assert!(result.patterns.is_empty());
        assert!(result.insights[0].contains("You currently have 4 day(s) with logs and 6 total meals."));
        assert_eq!(
            result.summary.as_deref(),
            Some("Insufficient data for full analysis. Please log for at least 5 days or 10 meals. You currently have 4 day(s) with logs and 6 total meals.")
        );
    }

    #[test]
    fn failed_keeps_uniform_shape() {
        let value = serde_json::to_value(AnalysisResult::failed()).unwrap();
        assert_eq!(value["error"], FETCH_FAILED_ERROR);
        assert_eq!(value["insights"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["recommendations"].as_array().map(Vec::len), Some(1));
    }
}
