use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use uuid::Uuid;

use mealmind_insights::config::AppConfig;
use mealmind_insights::meals::{InMemoryMealStore, MealStore, PgMealStore};
use mealmind_insights::state::AppState;

/// Dietary pattern analysis for one user's meal and mood logs.
#[derive(Debug, Parser)]
#[command(name = "mealmind-insights", version)]
struct Cli {
    /// User whose logs are analyzed.
    user_id: Uuid,

    /// Trailing window in days (defaults to ANALYSIS_DEFAULT_DAYS or 7).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    days: Option<u32>,

    /// Read meal records from a JSON array instead of Postgres.
    #[arg(long, value_name = "FILE")]
    from_json: Option<PathBuf>,

    /// Apply ./migrations before analyzing.
    #[arg(long, conflicts_with = "from_json")]
    migrate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "mealmind_insights=debug,sqlx=warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    // stdout carries the result
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let config = Arc::new(AppConfig::from_env()?);

    let store: Arc<dyn MealStore> = match &cli.from_json {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            let store = InMemoryMealStore::from_json(&raw)?;
            tracing::info!(path = %path.display(), meals = store.len(), "loaded meal records");
            Arc::new(store)
        }
        None => {
            let db = AppState::connect(&config).await?;
            if cli.migrate {
                if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
                    tracing::warn!(error = %e, "migration failed; continuing");
                }
            }
            Arc::new(PgMealStore::new(db))
        }
    };

    let state = AppState::from_parts(config, store);
    let days = cli.days.unwrap_or(state.config.default_days);
    let result = state.analyzer().analyze(cli.user_id, days).await;

    if let Some(error) = &result.error {
        tracing::error!(%error, "analysis did not complete");
    }
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
