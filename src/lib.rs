//! formstore: a persistent form-schema store.
//!
//! Owns a single resident form schema, persists it to a local sled
//! key-value cache under a fixed key, and supports load-with-fallback,
//! in-memory update, save, reset-to-default, validated import from a
//! file and pretty-printed export to a file.

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod schema;
pub mod store;

pub use cache::{CacheError, CacheOperations};
pub use config::{load_store_config, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use schema::{Field, FieldType, FormSchema, SchemaError, SchemaValidator};
pub use store::{FormStore, LoadOutcome};
