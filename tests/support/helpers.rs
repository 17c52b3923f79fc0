// tests/support/helpers.rs
use std::sync::Arc;

use edc_search::application::commands::search::SearchSlugService;
use edc_search::domain::search::{
    Identified, SearchSlugModel, SearchSlugPolicy, SearchSlugSchema,
};
use edc_search::infrastructure::database;
use edc_search::infrastructure::repositories::InMemorySearchSlugRepository;
use sqlx::SqlitePool;

/// Service over a fresh in-memory collection, plus a handle on that collection.
pub fn in_memory_service<M>(
    schema: &SearchSlugSchema,
    policy: SearchSlugPolicy,
) -> (SearchSlugService<M>, Arc<InMemorySearchSlugRepository<M>>)
where
    M: SearchSlugModel + Identified + Clone + Send + Sync + 'static,
{
    let repo = Arc::new(InMemorySearchSlugRepository::<M>::new());
    let service = SearchSlugService::new(repo.clone(), Arc::new(schema.clone()), policy);
    (service, repo)
}

/// Migrated single-connection in-memory SQLite database.
pub async fn sqlite_pool() -> SqlitePool {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("sqlite pool");
    database::run_migrations(&pool).await.expect("migrations");
    pool
}
