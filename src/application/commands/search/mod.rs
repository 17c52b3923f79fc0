// src/application/commands/search/mod.rs
mod save;
mod service;
mod update;

pub use service::SearchSlugService;
pub use update::UpdateReport;
