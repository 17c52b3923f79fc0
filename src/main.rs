use anyhow::Result;
use edc_search::{
    application::commands::search::SearchSlugService,
    config::AppConfig,
    domain::search::{SearchSlugRepository, StoredRecord},
    infrastructure::{
        database, repositories::SqliteSearchRecordRepository, schema_file::load_schema_file,
    },
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    // loads `.env` before RUST_LOG is read
    let config = AppConfig::from_env()?;
    init_tracing();

    let registry = load_schema_file(config.require_schema_path()?)?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    for schema in registry.iter() {
        let repo: Arc<dyn SearchSlugRepository<StoredRecord>> = Arc::new(
            SqliteSearchRecordRepository::new(pool.clone(), schema.model()),
        );
        let service = SearchSlugService::new(repo, Arc::clone(schema), config.slug_policy());
        let report = service.update_search_slugs().await?;
        tracing::info!(
            model = schema.model(),
            visited = report.visited,
            changed = report.changed,
            truncated = report.truncated,
            "model done"
        );
    }

    tracing::info!(models = registry.len(), "search slug update complete");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
