use crate::domain::errors::DomainResult;
use crate::domain::search::value_objects::RecordId;
use async_trait::async_trait;

/// Storage boundary for one collection of searchable records.
///
/// `save_base` is the raw write: it persists the record exactly as given and
/// never recomputes the slug. The hooked save lives in the application layer.
#[async_trait]
pub trait SearchSlugRepository<M>: Send + Sync
where
    M: Send + 'static,
{
    /// Inserts records without an id (assigning one) and updates the rest.
    async fn save_base(&self, record: &mut M) -> DomainResult<()>;
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<M>>;
    /// Every persisted record, in id order.
    async fn all(&self) -> DomainResult<Vec<M>>;
    /// Records whose slug contains `fragment`.
    async fn filter_by_slug(&self, fragment: &str) -> DomainResult<Vec<M>>;
}
