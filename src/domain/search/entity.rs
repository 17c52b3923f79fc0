use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::search::value_objects::{FieldValue, RecordId, SearchSlugState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named, typed attribute access on a searchable object.
pub trait SearchFields {
    /// Reads a single attribute. Unknown names are an error, not a null.
    fn field_value(&self, name: &str) -> DomainResult<FieldValue>;

    /// Follows a relation for dotted field paths (`subject.identifier`).
    /// `Ok(None)` means the relation exists but is unset.
    fn related(&self, name: &str) -> DomainResult<Option<&dyn SearchFields>> {
        Err(DomainError::UnknownField(name.to_string()))
    }
}

/// A record that carries the persisted slug columns.
pub trait SearchSlugModel: SearchFields {
    fn search_slug_state(&self) -> &SearchSlugState;
    fn search_slug_state_mut(&mut self) -> &mut SearchSlugState;

    fn slug(&self) -> Option<&str> {
        self.search_slug_state().slug()
    }

    fn search_slug_warning(&self) -> Option<&str> {
        self.search_slug_state().warning()
    }
}

/// Records addressable by a storage-assigned id.
pub trait Identified {
    fn record_id(&self) -> Option<RecordId>;
    fn assign_record_id(&mut self, id: RecordId);
}

/// Schema-less record whose values are stored as a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: Option<RecordId>,
    pub model: String,
    pub values: BTreeMap<String, FieldValue>,
    pub search: SearchSlugState,
}

impl StoredRecord {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            id: None,
            model: model.into(),
            values: BTreeMap::new(),
            search: SearchSlugState::default(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set_value(name, value);
        self
    }

    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }
}

/// The schema decides which names exist; an absent key reads as null.
impl SearchFields for StoredRecord {
    fn field_value(&self, name: &str) -> DomainResult<FieldValue> {
        Ok(self.values.get(name).cloned().unwrap_or(FieldValue::Null))
    }
}

impl SearchSlugModel for StoredRecord {
    fn search_slug_state(&self) -> &SearchSlugState {
        &self.search
    }

    fn search_slug_state_mut(&mut self) -> &mut SearchSlugState {
        &mut self.search
    }
}

impl Identified for StoredRecord {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }

    fn assign_record_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}
