use super::SearchSlugService;
use crate::{
    application::error::ApplicationResult,
    domain::search::{ComputedSlug, SearchSlugModel},
};

impl<M> SearchSlugService<M>
where
    M: SearchSlugModel + Send + 'static,
{
    /// Normal save path: recompute the slug, then write.
    pub async fn save(&self, record: &mut M) -> ApplicationResult<ComputedSlug> {
        let computed = self.hook.apply(&self.schema, record)?;
        self.repo.save_base(record).await?;
        tracing::debug!(model = self.schema.model(), slug = %computed.slug, "record saved");
        Ok(computed)
    }

    /// Writes the record as-is, skipping the slug hook.
    pub async fn save_base(&self, record: &mut M) -> ApplicationResult<()> {
        self.repo.save_base(record).await?;
        Ok(())
    }
}
