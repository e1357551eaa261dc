use std::sync::Arc;

use anyhow::Context;
use sqlx::PgPool;

use crate::analysis::DietaryAnalyzer;
use crate::config::AppConfig;
use crate::meals::{InMemoryMealStore, MealStore, PgMealStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn MealStore>,
}

impl AppState {
    /// Postgres-backed state from the environment.
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = Self::connect(&config).await?;
        let store = Arc::new(PgMealStore::new(db)) as Arc<dyn MealStore>;
        Ok(Self { config, store })
    }

    pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
        let url = config
            .database_url
            .as_deref()
            .context("DATABASE_URL is not set")?;
        let db = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(url)
            .await
            .context("connecting to postgres")?;
        Ok(db)
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Arc<dyn MealStore>) -> Self {
        Self { config, store }
    }

    /// Empty in-memory store with default config.
    pub fn fake() -> Self {
        Self::from_parts(
            Arc::new(AppConfig::default()),
            Arc::new(InMemoryMealStore::default()),
        )
    }

    pub fn analyzer(&self) -> DietaryAnalyzer {
        DietaryAnalyzer::new(self.store.clone())
    }
}
