use super::SearchSlugService;
use crate::{
    application::error::ApplicationResult,
    domain::search::SearchSlugModel,
};

/// Summary of one bulk slug refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub visited: usize,
    pub changed: usize,
    pub truncated: usize,
}

impl<M> SearchSlugService<M>
where
    M: SearchSlugModel + Send + 'static,
{
    /// Recomputes and persists the slug of every stored record.
    ///
    /// Slugs are computed for the whole collection before the first write,
    /// so a record that cannot be slugged aborts the run with nothing
    /// written. Writes go through the same hook as [`Self::save`].
    pub async fn update_search_slugs(&self) -> ApplicationResult<UpdateReport> {
        let mut records = self.repo.all().await?;
        let mut report = UpdateReport {
            visited: records.len(),
            ..UpdateReport::default()
        };

        let mut pending = Vec::with_capacity(records.len());
        for record in &mut records {
            let previous = record.slug().map(str::to_string);
            let computed = self.hook.apply(&self.schema, record)?;
            if computed.truncated() {
                report.truncated += 1;
            }
            pending.push(previous.as_deref() != Some(computed.slug.as_str()));
        }

        for (record, changed) in records.iter_mut().zip(pending) {
            self.repo.save_base(record).await?;
            if changed {
                report.changed += 1;
            }
        }

        tracing::info!(
            model = self.schema.model(),
            visited = report.visited,
            changed = report.changed,
            truncated = report.truncated,
            "search slugs updated"
        );
        Ok(report)
    }
}
