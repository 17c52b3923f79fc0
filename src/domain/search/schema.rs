use crate::domain::search::builder::SLUG_DELIMITER;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("duplicate search slug fields {fields:?} declared for model {model}")]
    DuplicateFields { model: String, fields: Vec<String> },
    #[error("invalid search slug segment {segment:?} for model {model}: {reason}")]
    InvalidSegment {
        model: String,
        segment: String,
        reason: &'static str,
    },
    #[error("search slug max length for model {model} must be positive")]
    InvalidMaxLength { model: String },
    #[error("search slug schema for model {0} is already registered")]
    AlreadyRegistered(String),
    #[error("model {model} extends unregistered model {parent}")]
    UnknownParent { model: String, parent: String },
}

/// One declared slug segment: a field read from the object, or a literal tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Field(String),
    Tag(String),
}

impl Segment {
    pub fn name(&self) -> &str {
        match self {
            Self::Field(name) | Self::Tag(name) => name,
        }
    }
}

/// Resolved, validated slug declaration for one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSlugSchema {
    model: String,
    segments: Vec<Segment>,
    max_length: Option<usize>,
}

impl SearchSlugSchema {
    pub fn builder(model: impl Into<String>) -> SearchSlugSchemaBuilder {
        SearchSlugSchemaBuilder::new(model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Segments in slug order: ancestors first, each level contributing its
    /// own fields followed by its own tags.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(name) => Some(name.as_str()),
            Segment::Tag(_) => None,
        })
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }
}

#[derive(Debug, Clone)]
pub struct SearchSlugSchemaBuilder {
    model: String,
    parent: Option<SearchSlugSchema>,
    fields: Vec<String>,
    tags: Vec<String>,
    max_length: Option<usize>,
}

impl SearchSlugSchemaBuilder {
    fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            parent: None,
            fields: Vec::new(),
            tags: Vec::new(),
            max_length: None,
        }
    }

    pub fn extends(mut self, parent: &SearchSlugSchema) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn build(self) -> Result<SearchSlugSchema, SchemaError> {
        let Self {
            model,
            parent,
            fields,
            tags,
            max_length,
        } = self;

        if max_length == Some(0) {
            return Err(SchemaError::InvalidMaxLength { model });
        }

        let segments = merge_segments(parent.as_ref(), fields, tags);
        validate_segments(&model, &segments)?;

        Ok(SearchSlugSchema {
            max_length: max_length.or_else(|| parent.as_ref().and_then(|p| p.max_length)),
            model,
            segments,
        })
    }
}

fn merge_segments(
    parent: Option<&SearchSlugSchema>,
    fields: Vec<String>,
    tags: Vec<String>,
) -> Vec<Segment> {
    let inherited = parent.map(|p| p.segments.clone()).unwrap_or_default();
    inherited
        .into_iter()
        .chain(fields.into_iter().map(Segment::Field))
        .chain(tags.into_iter().map(Segment::Tag))
        .collect()
}

fn validate_segments(model: &str, segments: &[Segment]) -> Result<(), SchemaError> {
    for segment in segments {
        let reason = match segment {
            _ if segment.name().trim().is_empty() => Some("name cannot be empty"),
            Segment::Tag(tag) if tag.contains(SLUG_DELIMITER) => {
                Some("tag cannot contain the slug delimiter")
            }
            Segment::Field(name) if name.split('.').any(str::is_empty) => {
                Some("field path has an empty component")
            }
            _ => None,
        };
        if let Some(reason) = reason {
            return Err(SchemaError::InvalidSegment {
                model: model.to_string(),
                segment: segment.name().to_string(),
                reason,
            });
        }
    }

    let mut seen = BTreeSet::new();
    let duplicates: BTreeSet<&str> = segments
        .iter()
        .map(Segment::name)
        .filter(|name| !seen.insert(*name))
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::DuplicateFields {
            model: model.to_string(),
            fields: duplicates.into_iter().map(str::to_string).collect(),
        })
    }
}
