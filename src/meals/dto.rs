use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, UtcOffset};
use uuid::Uuid;

use crate::analysis::categorizer::categorize_opt;
use crate::meals::portion::quantify_portion;

/// Placeholder used wherever a meal has no food name.
pub const UNKNOWN_FOOD: &str = "Unknown Food";

/// Slot a meal was logged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(format!("unknown meal type: {other}")),
        }
    }
}

/// Closed set of moods a user can log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodLabel {
    Frustrated,
    Sad,
    Anxious,
    Neutral,
    Grateful,
    Happy,
}

impl MoodLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Frustrated => "Frustrated",
            MoodLabel::Sad => "Sad",
            MoodLabel::Anxious => "Anxious",
            MoodLabel::Neutral => "Neutral",
            MoodLabel::Grateful => "Grateful",
            MoodLabel::Happy => "Happy",
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "frustrated" => Ok(MoodLabel::Frustrated),
            "sad" => Ok(MoodLabel::Sad),
            "anxious" => Ok(MoodLabel::Anxious),
            "neutral" => Ok(MoodLabel::Neutral),
            "grateful" => Ok(MoodLabel::Grateful),
            "happy" => Ok(MoodLabel::Happy),
            other => Err(format!("unknown mood label: {other}")),
        }
    }
}

/// A mood log entry, as joined onto the meal it was recorded near.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
    #[serde(default)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub label: MoodLabel,
    #[serde(default)]
    pub reason: String,
}

impl MoodRecord {
    pub fn new(user_id: Uuid, label: MoodLabel, created_at: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            created_at,
            label,
            reason: String::new(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }
}

/// A logged meal. Read-only input to the analysis engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    #[serde(default)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub portion_size: Option<String>,
    #[serde(default)]
    pub food_name: Option<String>,
    #[serde(default)]
    pub food_category: Option<String>,
    #[serde(default)]
    pub mood: Option<MoodRecord>,
    #[serde(default)]
    pub predicted_mood: Option<String>,
}

impl MealRecord {
    pub fn new(user_id: Uuid, created_at: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            created_at,
            meal_type: None,
            portion_size: None,
            food_name: None,
            food_category: None,
            mood: None,
            predicted_mood: None,
        }
    }

    pub fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = Some(meal_type);
        self
    }

    pub fn with_food(mut self, food_name: impl Into<String>) -> Self {
        self.food_name = Some(food_name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.food_category = Some(category.into());
        self
    }

    pub fn with_portion(mut self, portion: impl Into<String>) -> Self {
        self.portion_size = Some(portion.into());
        self
    }

    pub fn with_mood(mut self, mood: MoodRecord) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn with_predicted_mood(mut self, mood: impl Into<String>) -> Self {
        self.predicted_mood = Some(mood.into());
        self
    }

    /// Food name, or [`UNKNOWN_FOOD`] when the meal has none.
    pub fn food_label(&self) -> &str {
        self.food_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_FOOD)
    }

    /// Stored category if present and non-blank, otherwise derived from the food name.
    pub fn resolved_category(&self) -> &str {
        match self
            .food_category
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty())
        {
            Some(category) => category,
            None => categorize_opt(self.food_name.as_deref()),
        }
    }

    /// UTC calendar date the meal was logged on.
    pub fn logged_on(&self) -> Date {
        self.created_at.to_offset(UtcOffset::UTC).date()
    }

    pub fn portion_quantity(&self) -> Option<f64> {
        quantify_portion(self.portion_size.as_deref())
    }
}
