use sqlx::FromRow;
use time::OffsetDateTime;
use tracing::warn;
use uuid::Uuid;

use crate::meals::dto::{MealRecord, MealType, MoodLabel, MoodRecord};

/// One row of `meal_logs LEFT JOIN mood_logs`.
#[derive(Debug, FromRow)]
pub struct MealLogRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: OffsetDateTime,
    pub meal_type: Option<String>,
    pub portion_size: Option<String>,
    pub food_name: Option<String>,
    pub food_category: Option<String>,
    pub predicted_mood: Option<String>,
    pub mood_id: Option<Uuid>,
    pub mood_label: Option<String>,
    pub mood_reason: Option<String>,
    pub mood_created_at: Option<OffsetDateTime>,
}

impl From<MealLogRow> for MealRecord {
    fn from(r: MealLogRow) -> Self {
        let meal_type = r.meal_type.as_deref().and_then(|t| match t.parse::<MealType>() {
            Ok(meal_type) => Some(meal_type),
            Err(e) => {
                warn!(meal_id = %r.id, error = %e, "ignoring meal type");
                None
            }
        });

        let mood = match (r.mood_id, r.mood_label, r.mood_created_at) {
            (Some(id), Some(label), Some(created_at)) => match label.parse::<MoodLabel>() {
                Ok(label) => Some(MoodRecord {
                    id,
                    user_id: r.user_id,
                    created_at,
                    label,
                    reason: r.mood_reason.unwrap_or_default(),
                }),
                Err(e) => {
                    warn!(meal_id = %r.id, mood_id = %id, error = %e, "dropping mood link");
                    None
                }
            },
            _ => None,
        };

        Self {
            id: r.id,
            user_id: r.user_id,
            created_at: r.created_at,
            meal_type,
            portion_size: r.portion_size,
            food_name: r.food_name,
            food_category: r.food_category,
            mood,
            predicted_mood: r.predicted_mood,
        }
    }
}
