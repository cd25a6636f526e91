use serde::{de::DeserializeOwned, Serialize};

/// Errors raised by the persistent cache layer.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Underlying sled failures, including write/quota errors.
    #[error("cache database error: {0}")]
    Sled(#[from] sled::Error),

    /// The value could not be serialized for storage.
    #[error("cache serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The stored entry did not deserialize; the cache is corrupt.
    #[error("cache entry is corrupt: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Unified access to the persistent key-value cache.
///
/// All values are stored as JSON-serialized bytes and flushed on every
/// write so the cache survives process exit.
#[derive(Clone)]
pub struct CacheOperations {
    /// The underlying sled database instance
    db: sled::Db,
    /// Dedicated tree for schema documents
    pub(crate) schemas_tree: sled::Tree,
}

impl CacheOperations {
    /// Creates a new CacheOperations instance with its trees opened
    pub fn new(db: sled::Db) -> Result<Self, sled::Error> {
        let schemas_tree = db.open_tree("schemas")?;

        Ok(Self { db, schemas_tree })
    }

    /// Gets a reference to the underlying database
    pub fn db(&self) -> &sled::Db {
        &self.db
    }

    /// Generic function to store any serializable item in a specific tree
    pub fn store_in_tree<T: Serialize>(
        &self,
        tree: &sled::Tree,
        key: &str,
        item: &T,
    ) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(item).map_err(CacheError::Serialize)?;

        tree.insert(key.as_bytes(), bytes)?;

        // Ensure the data is durably written to disk
        tree.flush()?;

        Ok(())
    }

    /// Generic function to retrieve any deserializable item from a specific tree
    pub fn get_from_tree<T: DeserializeOwned>(
        &self,
        tree: &sled::Tree,
        key: &str,
    ) -> Result<Option<T>, CacheError> {
        match tree.get(key.as_bytes())? {
            Some(bytes) => {
                let item = serde_json::from_slice(&bytes).map_err(CacheError::Deserialize)?;
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }

    /// Delete an item from a specific tree, reporting whether it existed
    pub fn delete_from_tree(&self, tree: &sled::Tree, key: &str) -> Result<bool, CacheError> {
        let existed = tree.remove(key.as_bytes())?.is_some();

        tree.flush()?;

        Ok(existed)
    }

    /// Check if a key exists in a specific tree
    pub fn exists_in_tree(&self, tree: &sled::Tree, key: &str) -> Result<bool, CacheError> {
        Ok(tree.contains_key(key.as_bytes())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn temp_cache() -> (CacheOperations, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let db = sled::Config::new()
            .path(temp_dir.path())
            .temporary(true)
            .open()
            .expect("open temporary database");
        let cache = CacheOperations::new(db).expect("create cache operations");
        (cache, temp_dir)
    }

    #[test]
    fn test_tree_store_get_delete_cycle() {
        let (cache, _dir) = temp_cache();
        let tree = cache.schemas_tree.clone();

        let mut item = HashMap::new();
        item.insert("a".to_string(), 1u32);

        cache.store_in_tree(&tree, "key", &item).unwrap();
        assert!(cache.exists_in_tree(&tree, "key").unwrap());

        let back: HashMap<String, u32> = cache.get_from_tree(&tree, "key").unwrap().unwrap();
        assert_eq!(back, item);

        assert!(cache.delete_from_tree(&tree, "key").unwrap());
        assert!(!cache.exists_in_tree(&tree, "key").unwrap());
        assert!(!cache.delete_from_tree(&tree, "key").unwrap());
    }

    #[test]
    fn test_corrupt_entry_reports_deserialize_error() {
        let (cache, _dir) = temp_cache();
        let tree = cache.schemas_tree.clone();

        tree.insert("key".as_bytes(), b"not json".to_vec()).unwrap();

        let result: Result<Option<HashMap<String, u32>>, _> = cache.get_from_tree(&tree, "key");
        assert!(matches!(result, Err(CacheError::Deserialize(_))));
    }
}
