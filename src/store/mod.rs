//! The form-schema store: sole owner of the resident schema value and
//! its status flags, and sole mediator between in-memory state and the
//! persistent cache.
//!
//! The store is an explicitly owned state container: construct it
//! empty, load or import a schema, mutate/save/reset, and drop it at
//! process end. Consumers receive it by injection; there is no ambient
//! global.

use crate::cache::{CacheError, CacheOperations};
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::schema::{FormSchema, SchemaValidator};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Outcome of a [`FormStore::load`] call.
///
/// `load` never surfaces an error result; callers branch on the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A valid schema was read from the persistent cache.
    CacheHit,
    /// The cache had no entry; the default schema document was loaded.
    DefaultLoaded,
    /// The cache entry exists but did not deserialize. The resident
    /// schema is left untouched and no default fallback is attempted.
    CacheCorrupt,
    /// The cache had no entry and the default document could not be
    /// read or parsed.
    DefaultUnavailable,
}

impl LoadOutcome {
    /// True when the call left a schema resident.
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::CacheHit | LoadOutcome::DefaultLoaded)
    }
}

/// Owner of the single resident schema and its status flags.
pub struct FormStore {
    resident: Option<FormSchema>,
    is_loaded: bool,
    is_saving: bool,
    cache: Arc<CacheOperations>,
    default_schema_path: PathBuf,
}

impl FormStore {
    /// Creates an empty store around an injected cache and the path of
    /// the default schema document.
    pub fn new(cache: Arc<CacheOperations>, default_schema_path: PathBuf) -> Self {
        Self {
            resident: None,
            is_loaded: false,
            is_saving: false,
            cache,
            default_schema_path,
        }
    }

    /// Opens the sled database named by the configuration and builds a
    /// store around it.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        let db = sled::open(&config.data_dir).map_err(CacheError::Sled)?;
        let cache = Arc::new(CacheOperations::new(db).map_err(CacheError::Sled)?);
        Ok(Self::new(cache, config.default_schema_path.clone()))
    }

    /// The resident schema, if one has been loaded or imported.
    pub fn schema(&self) -> Option<&FormSchema> {
        self.resident.as_ref()
    }

    /// True iff a load or import has completed successfully since the
    /// last reset or failure.
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// True only for the synchronous duration of a save call; exposed
    /// for UI feedback.
    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    /// Loads a schema from the cache, falling back to the default
    /// document when no cache entry exists.
    ///
    /// A corrupt cache entry does NOT fall back to the default in the
    /// same call; the [`LoadOutcome::CacheCorrupt`] tag lets the caller
    /// decide whether to reset.
    pub async fn load(&mut self) -> LoadOutcome {
        match self.cache.get_schema() {
            Ok(Some(schema)) => {
                self.resident = Some(schema);
                self.is_loaded = true;
                info!("Loaded schema from cache");
                return LoadOutcome::CacheHit;
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to load schema from cache: {}", e);
                self.is_loaded = false;
                return LoadOutcome::CacheCorrupt;
            }
        }

        match self.load_default().await {
            Ok(schema) => {
                self.resident = Some(schema);
                self.is_loaded = true;
                info!(
                    "Loaded schema from default document {}",
                    self.default_schema_path.display()
                );
                LoadOutcome::DefaultLoaded
            }
            Err(e) => {
                error!("Failed to load default schema: {}", e);
                self.is_loaded = false;
                LoadOutcome::DefaultUnavailable
            }
        }
    }

    async fn load_default(&self) -> StoreResult<FormSchema> {
        let contents = tokio::fs::read_to_string(&self.default_schema_path).await?;
        let schema = serde_json::from_str(&contents)?;
        Ok(schema)
    }

    /// Replaces the resident schema in memory. No validation, no
    /// persistence side effect.
    pub fn update(&mut self, new_schema: FormSchema) {
        self.resident = Some(new_schema);
    }

    /// Serializes the resident schema and writes it to the cache under
    /// the fixed key. No retry on failure.
    pub fn save(&mut self) -> StoreResult<()> {
        let Some(schema) = self.resident.as_ref() else {
            error!("No schema to save");
            return Err(StoreError::NoResidentSchema);
        };

        self.is_saving = true;
        let result = self.cache.store_schema(schema);
        self.is_saving = false;

        match result {
            Ok(()) => {
                info!("Schema saved to cache");
                Ok(())
            }
            Err(e) => {
                error!("Failed to save schema to cache: {}", e);
                Err(e.into())
            }
        }
    }

    /// Deletes the cache entry, clears the resident schema, then
    /// reloads. Ordering is load-bearing: the reload must observe the
    /// cache entry already gone so it falls through to the default
    /// document.
    pub async fn reset_to_default(&mut self) -> StoreResult<LoadOutcome> {
        self.cache.delete_schema()?;
        info!("Reset to default; cache entry cleared");

        self.resident = None;
        self.is_loaded = false;
        Ok(self.load().await)
    }

    /// Reads a schema document from a file, shape-checks it, then
    /// replaces the resident schema and persists it to the cache in the
    /// same call.
    ///
    /// On any failure nothing changes; the error's Display is the
    /// human-readable message for the user.
    pub async fn import(&mut self, path: &Path) -> StoreResult<()> {
        let text = tokio::fs::read_to_string(path).await?;
        let value: serde_json::Value = serde_json::from_str(&text)?;

        SchemaValidator::new().validate_document(&value)?;

        let schema: FormSchema = serde_json::from_value(value)?;

        // The resident schema only changes once the cache write has
        // succeeded.
        self.cache.store_schema(&schema)?;
        self.resident = Some(schema);
        self.is_loaded = true;
        info!("Imported new schema from {}", path.display());

        Ok(())
    }

    /// Writes the resident schema as pretty-printed JSON into `dir`,
    /// named from the schema's `name` field plus the backup suffix.
    ///
    /// Returns `Ok(None)` without touching the filesystem when no
    /// schema is resident.
    pub fn export_to(&self, dir: &Path) -> StoreResult<Option<PathBuf>> {
        let Some(schema) = self.resident.as_ref() else {
            return Ok(None);
        };

        let contents = serde_json::to_string_pretty(schema)?;
        let path = dir.join(schema.export_file_name());
        std::fs::write(&path, contents)?;
        info!("Schema exported to {}", path.display());

        Ok(Some(path))
    }

    /// True iff the fixed cache key currently has any value. This is a
    /// presence check, not a diff: it does not detect drift between the
    /// resident and cached values.
    pub fn has_local_changes(&self) -> bool {
        match self.cache.has_schema() {
            Ok(present) => present,
            Err(e) => {
                warn!("Failed to check cache for local changes: {}", e);
                false
            }
        }
    }
}
