// src/domain/search/builder.rs
use crate::domain::errors::DomainResult;
use crate::domain::search::entity::SearchFields;
use crate::domain::search::schema::Segment;
use crate::domain::search::value_objects::{FieldValue, SearchSlug};
use slug::slugify;

pub const SLUG_DELIMITER: char = '|';

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f%:z";

/// Converts a field value into its slug segment. Nulls become `""`.
pub fn normalize(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => String::new(),
        FieldValue::Text(text) => slugify(text),
        FieldValue::Integer(n) => slugify(n.to_string()),
        FieldValue::Float(n) => slugify(n.to_string()),
        FieldValue::Boolean(b) => b.to_string(),
        FieldValue::Date(date) => slugify(date.format("%Y-%m-%d").to_string()),
        FieldValue::DateTime(dt) => slugify(dt.format(DATETIME_FORMAT).to_string()),
    }
}

/// Reads a possibly dotted field path. An unset relation along the path
/// yields `Null`.
pub fn resolve(object: &dyn SearchFields, path: &str) -> DomainResult<FieldValue> {
    match path.split_once('.') {
        None => object.field_value(path),
        Some((head, rest)) => match object.related(head)? {
            Some(related) => resolve(related, rest),
            None => Ok(FieldValue::Null),
        },
    }
}

/// Builds the slug for `fields` in order, one segment per field.
pub fn build<S: AsRef<str>>(object: &dyn SearchFields, fields: &[S]) -> DomainResult<SearchSlug> {
    let segments: Vec<Segment> = fields
        .iter()
        .map(|field| Segment::Field(field.as_ref().to_string()))
        .collect();
    build_segments(object, &segments)
}

/// Builds the slug for declared segments: fields are resolved and
/// normalized, tags are copied verbatim.
pub fn build_segments(
    object: &dyn SearchFields,
    segments: &[Segment],
) -> DomainResult<SearchSlug> {
    let rendered = segments
        .iter()
        .map(|segment| match segment {
            Segment::Field(path) => resolve(object, path).map(|value| normalize(&value)),
            Segment::Tag(tag) => Ok(tag.clone()),
        })
        .collect::<DomainResult<Vec<_>>>()?;
    Ok(SearchSlug::from_segments(rendered))
}
