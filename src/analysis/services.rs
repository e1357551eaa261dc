use std::sync::Arc;

use time::macros::datetime;
use time::{Duration, OffsetDateTime};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::analysis::config::AnalysisConfig;
use crate::analysis::dto::AnalysisResult;
use crate::analysis::emotional::detect_emotional_eating;
use crate::analysis::intake::{analyze_overall_carb_intake, detect_intake_rule};
use crate::analysis::patterns::{DetectedPattern, PatternSet};
use crate::analysis::temporal::{
    detect_frequent_snacking, detect_skipping_breakfast, distinct_logging_days,
};
use crate::meals::{MealRecord, MealStore};

/// Lower bound for window starts; oversized windows are clamped here.
pub const EARLIEST_WINDOW_START: OffsetDateTime = datetime!(0001-01-01 00:00 UTC);

/// Runs the pattern pipeline for one user over a trailing window of days.
#[derive(Clone)]
pub struct DietaryAnalyzer {
    store: Arc<dyn MealStore>,
    config: Arc<AnalysisConfig>,
}

impl DietaryAnalyzer {
    pub fn new(store: Arc<dyn MealStore>) -> Self {
        Self::with_config(store, Arc::new(AnalysisConfig::default()))
    }

    pub fn with_config(store: Arc<dyn MealStore>, config: Arc<AnalysisConfig>) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub async fn analyze(&self, user_id: Uuid, days: u32) -> AnalysisResult {
        self.analyze_at(user_id, days, OffsetDateTime::now_utc()).await
    }

    /// Same as [`analyze`](Self::analyze) with the window anchored at `now`.
    #[instrument(skip(self))]
    pub async fn analyze_at(&self, user_id: Uuid, days: u32, now: OffsetDateTime) -> AnalysisResult {
        let since = window_start(now, days);
        let meals = match self.store.meals_since(user_id, since).await {
            Ok(meals) => meals,
            Err(e) => {
                error!(error = %e, %user_id, "failed to fetch meals");
                return AnalysisResult::failed();
            }
        };

        let meals: Vec<MealRecord> = meals.into_iter().filter(|m| m.created_at <= now).collect();
        let result = analyze_window(&meals, &self.config);
        info!(
            meals = meals.len(),
            patterns = result.patterns.len(),
            status = ?result.status,
            "analysis finished"
        );
        result
    }
}

/// `now - days`, clamped to [`EARLIEST_WINDOW_START`].
pub fn window_start(now: OffsetDateTime, days: u32) -> OffsetDateTime {
    match now.checked_sub(Duration::days(i64::from(days))) {
        Some(since) if since >= EARLIEST_WINDOW_START => since,
        _ => {
            debug!(days, "window clamped to earliest start");
            EARLIEST_WINDOW_START
        }
    }
}

/// Sufficiency gate plus detectors over an already-fetched window.
pub fn analyze_window(meals: &[MealRecord], cfg: &AnalysisConfig) -> AnalysisResult {
    if meals.is_empty() {
        return AnalysisResult::no_data();
    }

    let days_with_logging = distinct_logging_days(meals);
    if days_with_logging < cfg.min_logging_days && meals.len() < cfg.min_total_meals {
        return AnalysisResult::insufficient_data(days_with_logging, meals.len(), cfg);
    }

    AnalysisResult::complete(detect_patterns(meals, days_with_logging, cfg))
}

pub fn detect_patterns(
    meals: &[MealRecord],
    days_with_logging: usize,
    cfg: &AnalysisConfig,
) -> Vec<DetectedPattern> {
    let mut patterns = PatternSet::default();
    patterns.extend(detect_frequent_snacking(meals, days_with_logging, cfg));
    patterns.extend(detect_skipping_breakfast(meals, days_with_logging, cfg));
    patterns.extend(detect_intake_rule(meals, &cfg.processed_snacks));
    patterns.extend(detect_intake_rule(meals, &cfg.sugary_beverages));
    patterns.extend(analyze_overall_carb_intake(meals, cfg));
    patterns.extend(detect_emotional_eating(meals, cfg));
    patterns.into_patterns()
}
