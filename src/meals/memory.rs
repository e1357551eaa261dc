use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::StoreError;
use crate::meals::dto::MealRecord;
use crate::meals::repo::MealStore;

/// Vector-backed [`MealStore`], used by the CLI's JSON mode and by tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMealStore {
    meals: Vec<MealRecord>,
    failure: Option<String>,
}

impl InMemoryMealStore {
    pub fn new(meals: Vec<MealRecord>) -> Self {
        Self {
            meals,
            failure: None,
        }
    }

    /// A store whose every query fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            meals: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    /// Loads a JSON array of meal records.
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let meals: Vec<MealRecord> = serde_json::from_str(raw)?;
        Ok(Self::new(meals))
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[async_trait]
impl MealStore for InMemoryMealStore {
    async fn meals_since(
        &self,
        user_id: Uuid,
        since: OffsetDateTime,
    ) -> Result<Vec<MealRecord>, StoreError> {
        if let Some(reason) = &self.failure {
            return Err(StoreError::Unavailable(reason.clone()));
        }

        let mut meals: Vec<MealRecord> = self
            .meals
            .iter()
            .filter(|m| m.user_id == user_id && m.created_at >= since)
            .cloned()
            .collect();
        meals.sort_by_key(|m| m.created_at);
        Ok(meals)
    }
}
