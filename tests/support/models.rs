// tests/support/models.rs
use chrono::{DateTime, Utc};
use edc_search::domain::errors::{DomainError, DomainResult};
use edc_search::domain::search::{
    FieldValue, Identified, RecordId, SchemaError, SearchFields, SearchSlugModel,
    SearchSlugSchema, SearchSlugState,
};
use once_cell::sync::Lazy;

pub static TEST_MODEL_SCHEMA: Lazy<SearchSlugSchema> = Lazy::new(|| {
    SearchSlugSchema::builder("TestModel")
        .fields(["f1", "f2", "f3"])
        .tags(["attr", "dummy", "dummy_attr"])
        .build()
        .expect("TestModel schema")
});

pub static TEST_MODEL_EXTRA_SCHEMA: Lazy<SearchSlugSchema> = Lazy::new(|| {
    SearchSlugSchema::builder("TestModelExtra")
        .extends(&TEST_MODEL_SCHEMA)
        .field("f4")
        .build()
        .expect("TestModelExtra schema")
});

/// Redeclares `f1` on top of the inherited fields.
pub static TEST_MODEL_DUPLICATE_SCHEMA: Lazy<Result<SearchSlugSchema, SchemaError>> =
    Lazy::new(|| {
        SearchSlugSchema::builder("TestModelDuplicate")
            .extends(&TEST_MODEL_SCHEMA)
            .fields(["f4", "f1"])
            .build()
    });

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestModel {
    pub id: Option<RecordId>,
    pub f1: Option<String>,
    pub f2: Option<DateTime<Utc>>,
    pub f3: Option<i64>,
    pub search: SearchSlugState,
}

impl TestModel {
    pub fn new(f1: Option<&str>, f2: Option<DateTime<Utc>>, f3: Option<i64>) -> Self {
        Self {
            f1: f1.map(str::to_string),
            f2,
            f3,
            ..Self::default()
        }
    }
}

impl SearchFields for TestModel {
    fn field_value(&self, name: &str) -> DomainResult<FieldValue> {
        match name {
            "f1" => Ok(self.f1.clone().into()),
            "f2" => Ok(self.f2.into()),
            "f3" => Ok(self.f3.into()),
            other => Err(DomainError::UnknownField(format!("TestModel.{other}"))),
        }
    }
}

impl SearchSlugModel for TestModel {
    fn search_slug_state(&self) -> &SearchSlugState {
        &self.search
    }

    fn search_slug_state_mut(&mut self) -> &mut SearchSlugState {
        &mut self.search
    }
}

impl Identified for TestModel {
    fn record_id(&self) -> Option<RecordId> {
        self.id
    }

    fn assign_record_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestModelExtra {
    pub base: TestModel,
    pub f4: Option<String>,
}

impl SearchFields for TestModelExtra {
    fn field_value(&self, name: &str) -> DomainResult<FieldValue> {
        match name {
            "f4" => Ok(self.f4.clone().into()),
            other => self.base.field_value(other),
        }
    }
}

impl SearchSlugModel for TestModelExtra {
    fn search_slug_state(&self) -> &SearchSlugState {
        &self.base.search
    }

    fn search_slug_state_mut(&mut self) -> &mut SearchSlugState {
        &mut self.base.search
    }
}

impl Identified for TestModelExtra {
    fn record_id(&self) -> Option<RecordId> {
        self.base.id
    }

    fn assign_record_id(&mut self, id: RecordId) {
        self.base.id = Some(id);
    }
}

/// Plain object with integer defaults, no persistence.
pub struct MyModel {
    pub f1: i64,
    pub f2: i64,
}

impl Default for MyModel {
    fn default() -> Self {
        Self { f1: 1, f2: 2 }
    }
}

impl SearchFields for MyModel {
    fn field_value(&self, name: &str) -> DomainResult<FieldValue> {
        match name {
            "f1" => Ok(self.f1.into()),
            "f2" => Ok(self.f2.into()),
            other => Err(DomainError::UnknownField(other.to_string())),
        }
    }
}
