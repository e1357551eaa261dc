use anyhow::ensure;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Unset means no Postgres store; the CLI then needs `--from-json`.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub default_days: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());
        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);
        let default_days = std::env::var("ANALYSIS_DEFAULT_DAYS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(7);
        ensure!(default_days > 0, "ANALYSIS_DEFAULT_DAYS must be at least 1");

        Ok(Self {
            database_url,
            db_max_connections,
            default_days,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            db_max_connections: 10,
            default_days: 7,
        }
    }
}
