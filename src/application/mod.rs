pub mod commands;
pub mod error;
pub mod queries;

pub use error::ApplicationResult;
