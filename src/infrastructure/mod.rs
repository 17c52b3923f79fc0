pub mod database;
pub mod repositories;
pub mod schema_file;
