//! Common constants used across the formstore project.
//!
//! These defaults are used for command line arguments and
//! configuration when explicit values are not provided.

/// Fixed cache key under which the schema document is persisted.
pub const STORAGE_KEY: &str = "admin_schema";

/// Suffix appended to the schema name when exporting a backup file.
pub const EXPORT_SUFFIX: &str = "_backup";

/// Filename stem used for exports when the schema name is empty.
pub const DEFAULT_EXPORT_NAME: &str = "schema";

/// Default location of the store configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/store_config.json";
