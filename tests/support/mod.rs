// tests/support/mod.rs
// Shared by several integration test binaries; each binary only uses part
// of it, so dead_code / unused_imports are allowed at the module level.
#[allow(dead_code, unused_imports)]
pub mod models;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use models::*;

#[allow(unused_imports)]
pub use helpers::*;
