pub mod dto;
pub mod memory;
pub mod portion;
pub mod repo;
mod repo_types;

pub use dto::{MealRecord, MealType, MoodLabel, MoodRecord};
pub use memory::InMemoryMealStore;
pub use repo::{MealStore, PgMealStore};
