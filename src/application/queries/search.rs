// src/application/queries/search.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::search::{FieldValue, RecordId, normalize, repository::SearchSlugRepository},
};

pub struct SearchRecordsQuery {
    pub query: String,
}

/// Read side over a slugged collection.
pub struct SearchSlugQueryService<M>
where
    M: Send + 'static,
{
    repo: Arc<dyn SearchSlugRepository<M>>,
}

impl<M> SearchSlugQueryService<M>
where
    M: Send + 'static,
{
    pub fn new(repo: Arc<dyn SearchSlugRepository<M>>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<M> {
        let id = RecordId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("record {} not found", id.0)))
    }

    /// Finds records whose slug contains the normalized query text.
    pub async fn search(&self, query: SearchRecordsQuery) -> ApplicationResult<Vec<M>> {
        let fragment = normalize(&FieldValue::Text(query.query));
        if fragment.is_empty() {
            return Err(ApplicationError::validation(
                "search query has no searchable characters",
            ));
        }
        Ok(self.repo.filter_by_slug(&fragment).await?)
    }
}
