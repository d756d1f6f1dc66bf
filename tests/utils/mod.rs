pub mod builders;
pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use builders::{GameBuilder, HORNETS_ID};
pub use mocks::StubDataSource;
#[allow(unused_imports)]
pub use setup::{get, send, TestAppBuilder, TestResponse};
