pub mod builder;
pub mod entity;
pub mod hook;
pub mod registry;
pub mod repository;
pub mod schema;
pub mod value_objects;

pub use builder::{SLUG_DELIMITER, build, build_segments, normalize, resolve};
pub use entity::{Identified, SearchFields, SearchSlugModel, StoredRecord};
pub use hook::{ComputedSlug, DEFAULT_MAX_SLUG_LENGTH, SearchSlugHook, SearchSlugPolicy};
pub use registry::{SchemaDeclaration, SchemaRegistry};
pub use repository::SearchSlugRepository;
pub use schema::{SchemaError, SearchSlugSchema, SearchSlugSchemaBuilder, Segment};
pub use value_objects::{FieldValue, RecordId, SearchSlug, SearchSlugState};
