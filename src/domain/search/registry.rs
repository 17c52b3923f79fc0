use crate::domain::search::schema::{SchemaError, SearchSlugSchema};
use serde::Deserialize;
use std::sync::Arc;

/// Declarative form of a schema, as found in configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaDeclaration {
    pub model: String,
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub max_length: Option<usize>,
}

/// Schemas by model label, in registration order.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: Vec<Arc<SearchSlugSchema>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        schema: SearchSlugSchema,
    ) -> Result<Arc<SearchSlugSchema>, SchemaError> {
        if self.get(schema.model()).is_some() {
            return Err(SchemaError::AlreadyRegistered(schema.model().to_string()));
        }
        let schema = Arc::new(schema);
        self.schemas.push(Arc::clone(&schema));
        Ok(schema)
    }

    /// Builds and registers a declaration. A parent must be registered first.
    pub fn declare(
        &mut self,
        declaration: SchemaDeclaration,
    ) -> Result<Arc<SearchSlugSchema>, SchemaError> {
        let SchemaDeclaration {
            model,
            extends,
            fields,
            tags,
            max_length,
        } = declaration;

        let mut builder = SearchSlugSchema::builder(model.clone());
        if let Some(parent) = extends {
            let parent_schema = self
                .get(&parent)
                .ok_or_else(|| SchemaError::UnknownParent {
                    model: model.clone(),
                    parent,
                })?;
            builder = builder.extends(&parent_schema);
        }
        builder = builder.fields(fields).tags(tags);
        if let Some(max_length) = max_length {
            builder = builder.max_length(max_length);
        }

        self.register(builder.build()?)
    }

    pub fn from_declarations<I>(declarations: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = SchemaDeclaration>,
    {
        let mut registry = Self::new();
        for declaration in declarations {
            registry.declare(declaration)?;
        }
        Ok(registry)
    }

    pub fn get(&self, model: &str) -> Option<Arc<SearchSlugSchema>> {
        self.schemas
            .iter()
            .find(|schema| schema.model() == model)
            .cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<SearchSlugSchema>> {
        self.schemas.iter()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
