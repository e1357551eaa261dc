use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreError;
use crate::meals::dto::MealRecord;
use crate::meals::repo_types::MealLogRow;

/// Read side of the meal/mood record store.
#[async_trait]
pub trait MealStore: Send + Sync {
    /// Meals for `user_id` created at or after `since`, oldest first, each
    /// joined with its linked mood log when there is one.
    async fn meals_since(
        &self,
        user_id: Uuid,
        since: OffsetDateTime,
    ) -> Result<Vec<MealRecord>, StoreError>;
}

#[derive(Clone)]
pub struct PgMealStore {
    db: PgPool,
}

impl PgMealStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MealStore for PgMealStore {
    async fn meals_since(
        &self,
        user_id: Uuid,
        since: OffsetDateTime,
    ) -> Result<Vec<MealRecord>, StoreError> {
        let rows = sqlx::query_as::<_, MealLogRow>(
            r#"
            SELECT m.id, m.user_id, m.created_at, m.meal_type, m.portion_size,
                   m.food_name, m.food_category, m.predicted_mood,
                   ml.id AS mood_id, ml.mood_label, ml.reason_text AS mood_reason,
                   ml.created_at AS mood_created_at
            FROM meal_logs m
            LEFT JOIN mood_logs ml ON ml.id = m.mood_log_id
            WHERE m.user_id = $1 AND m.created_at >= $2
            ORDER BY m.created_at ASC
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(&self.db)
        .await?;

        debug!(%user_id, count = rows.len(), "meal logs fetched");
        Ok(rows.into_iter().map(MealRecord::from).collect())
    }
}
