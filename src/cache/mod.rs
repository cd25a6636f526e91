//! Persistent key-value cache backed by sled.
//!
//! The cache retains the schema document across sessions under a fixed
//! key; the store layer is its only consumer.

pub mod core;
pub mod schema_operations;

pub use self::core::{CacheError, CacheOperations};
