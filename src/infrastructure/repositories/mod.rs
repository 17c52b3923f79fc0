// src/infrastructure/repositories/mod.rs
mod error;
mod in_memory;
mod sqlite_record;

pub use error::{map_json, map_sqlx};
pub use in_memory::InMemorySearchSlugRepository;
pub use sqlite_record::SqliteSearchRecordRepository;
