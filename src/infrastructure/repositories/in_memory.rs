use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::search::{Identified, RecordId, SearchSlugModel, SearchSlugRepository};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

struct Store<M> {
    records: BTreeMap<RecordId, M>,
    last_id: i64,
}

/// Process-local collection, used by tests and tooling without a database.
pub struct InMemorySearchSlugRepository<M> {
    store: Mutex<Store<M>>,
}

impl<M> Default for InMemorySearchSlugRepository<M> {
    fn default() -> Self {
        Self {
            store: Mutex::new(Store {
                records: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl<M> InMemorySearchSlugRepository<M> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Store<M>>> {
        self.store
            .lock()
            .map_err(|_| DomainError::Persistence("in-memory store lock poisoned".into()))
    }
}

#[async_trait]
impl<M> SearchSlugRepository<M> for InMemorySearchSlugRepository<M>
where
    M: SearchSlugModel + Identified + Clone + Send + Sync + 'static,
{
    async fn save_base(&self, record: &mut M) -> DomainResult<()> {
        let mut store = self.lock()?;
        let id = match record.record_id() {
            Some(id) if store.records.contains_key(&id) => id,
            Some(id) => return Err(DomainError::NotFound(format!("record {} not found", id.0))),
            None => {
                store.last_id += 1;
                let id = RecordId::new(store.last_id)?;
                record.assign_record_id(id);
                id
            }
        };
        store.records.insert(id, record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<M>> {
        Ok(self.lock()?.records.get(&id).cloned())
    }

    async fn all(&self) -> DomainResult<Vec<M>> {
        Ok(self.lock()?.records.values().cloned().collect())
    }

    async fn filter_by_slug(&self, fragment: &str) -> DomainResult<Vec<M>> {
        Ok(self
            .lock()?
            .records
            .values()
            .filter(|record| record.slug().is_some_and(|slug| slug.contains(fragment)))
            .cloned()
            .collect())
    }
}
