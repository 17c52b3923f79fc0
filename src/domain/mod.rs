pub mod errors;
pub mod search;
