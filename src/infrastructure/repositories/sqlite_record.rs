// src/infrastructure/repositories/sqlite_record.rs
use super::{map_json, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::search::{
    FieldValue, RecordId, SearchSlugRepository, SearchSlugState, StoredRecord,
};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::collections::BTreeMap;

const SELECT_COLUMNS: &str =
    "SELECT id, model, fields, slug, search_slug_warning FROM search_records";

/// `search_records` rows of a single model label.
#[derive(Clone)]
pub struct SqliteSearchRecordRepository {
    pool: SqlitePool,
    model: String,
}

impl SqliteSearchRecordRepository {
    pub fn new(pool: SqlitePool, model: impl Into<String>) -> Self {
        Self {
            pool,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Encodes the field document, refusing values JSON cannot round-trip.
    fn encode_fields(record: &StoredRecord) -> DomainResult<String> {
        if let Some((name, _)) = record
            .values
            .iter()
            .find(|(_, value)| matches!(value, FieldValue::Float(n) if !n.is_finite()))
        {
            return Err(DomainError::Validation(format!(
                "field {}.{name} holds a non-finite number",
                record.model
            )));
        }
        serde_json::to_string(&record.values).map_err(map_json)
    }

    fn ensure_model(&self, record: &StoredRecord) -> DomainResult<()> {
        if record.model == self.model {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "record of model {} cannot be stored in the {} collection",
                record.model, self.model
            )))
        }
    }
}

#[derive(Debug, FromRow)]
struct SearchRecordRow {
    id: i64,
    model: String,
    fields: String,
    slug: Option<String>,
    search_slug_warning: Option<String>,
}

impl TryFrom<SearchRecordRow> for StoredRecord {
    type Error = DomainError;

    fn try_from(row: SearchRecordRow) -> Result<Self, Self::Error> {
        let values: BTreeMap<String, FieldValue> =
            serde_json::from_str(&row.fields).map_err(map_json)?;
        Ok(StoredRecord {
            id: Some(RecordId::new(row.id)?),
            model: row.model,
            values,
            search: SearchSlugState {
                slug: row.slug,
                warning: row.search_slug_warning,
            },
        })
    }
}

#[async_trait]
impl SearchSlugRepository<StoredRecord> for SqliteSearchRecordRepository {
    async fn save_base(&self, record: &mut StoredRecord) -> DomainResult<()> {
        self.ensure_model(record)?;
        let fields = Self::encode_fields(record)?;

        match record.id {
            None => {
                let id = sqlx::query_scalar::<_, i64>(
                    "INSERT INTO search_records (model, fields, slug, search_slug_warning)
                     VALUES (?, ?, ?, ?)
                     RETURNING id",
                )
                .bind(record.model.as_str())
                .bind(fields.as_str())
                .bind(record.search.slug())
                .bind(record.search.warning())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
                record.id = Some(RecordId::new(id)?);
            }
            Some(id) => {
                let result = sqlx::query(
                    "UPDATE search_records SET fields = ?, slug = ?, search_slug_warning = ?
                     WHERE id = ? AND model = ?",
                )
                .bind(fields.as_str())
                .bind(record.search.slug())
                .bind(record.search.warning())
                .bind(i64::from(id))
                .bind(self.model.as_str())
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;
                if result.rows_affected() == 0 {
                    return Err(DomainError::NotFound(format!("record {} not found", id.0)));
                }
            }
        }
        Ok(())
    }

    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<StoredRecord>> {
        let row = sqlx::query_as::<_, SearchRecordRow>(&format!(
            "{SELECT_COLUMNS} WHERE id = ? AND model = ?"
        ))
        .bind(i64::from(id))
        .bind(self.model.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(StoredRecord::try_from).transpose()
    }

    async fn all(&self) -> DomainResult<Vec<StoredRecord>> {
        let rows = sqlx::query_as::<_, SearchRecordRow>(&format!(
            "{SELECT_COLUMNS} WHERE model = ? ORDER BY id"
        ))
        .bind(self.model.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(StoredRecord::try_from).collect()
    }

    async fn filter_by_slug(&self, fragment: &str) -> DomainResult<Vec<StoredRecord>> {
        let rows = sqlx::query_as::<_, SearchRecordRow>(&format!(
            "{SELECT_COLUMNS} WHERE model = ? AND instr(slug, ?) > 0 ORDER BY id"
        ))
        .bind(self.model.as_str())
        .bind(fragment)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(StoredRecord::try_from).collect()
    }
}
