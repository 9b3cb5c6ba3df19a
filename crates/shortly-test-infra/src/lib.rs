//! Disposable backends for integration tests.

pub mod dynamodb;
pub mod error;
pub mod mysql;

pub use error::{Result, TestInfraError};
