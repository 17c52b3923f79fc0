use crate::domain::search::{SchemaDeclaration, SchemaError, SchemaRegistry};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaFileError {
    #[error("failed to read schema file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid schema file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Parses a JSON array of schema declarations. Parents must appear before
/// the models that extend them.
pub fn parse_schemas(json: &str) -> Result<SchemaRegistry, SchemaFileError> {
    let declarations: Vec<SchemaDeclaration> = serde_json::from_str(json)?;
    Ok(SchemaRegistry::from_declarations(declarations)?)
}

pub fn load_schema_file(path: &Path) -> Result<SchemaRegistry, SchemaFileError> {
    let json = std::fs::read_to_string(path).map_err(|source| SchemaFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let registry = parse_schemas(&json)?;
    tracing::debug!(path = %path.display(), models = registry.len(), "loaded search slug schemas");
    Ok(registry)
}
