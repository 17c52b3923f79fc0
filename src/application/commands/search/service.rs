// src/application/commands/search/service.rs
use std::sync::Arc;

use crate::domain::search::{
    SearchSlugHook, SearchSlugModel, SearchSlugPolicy, SearchSlugSchema,
    repository::SearchSlugRepository,
};

/// Persists searchable records of one model with their slug kept current.
pub struct SearchSlugService<M>
where
    M: SearchSlugModel + Send + 'static,
{
    pub(super) repo: Arc<dyn SearchSlugRepository<M>>,
    pub(super) schema: Arc<SearchSlugSchema>,
    pub(super) hook: SearchSlugHook,
}

impl<M> SearchSlugService<M>
where
    M: SearchSlugModel + Send + 'static,
{
    pub fn new(
        repo: Arc<dyn SearchSlugRepository<M>>,
        schema: Arc<SearchSlugSchema>,
        policy: SearchSlugPolicy,
    ) -> Self {
        Self {
            repo,
            schema,
            hook: SearchSlugHook::new(policy),
        }
    }

    pub fn schema(&self) -> &SearchSlugSchema {
        &self.schema
    }

    pub fn repository(&self) -> Arc<dyn SearchSlugRepository<M>> {
        Arc::clone(&self.repo)
    }
}
