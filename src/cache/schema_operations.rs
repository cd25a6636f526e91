use super::core::{CacheError, CacheOperations};
use crate::constants::STORAGE_KEY;
use crate::schema::FormSchema;

impl CacheOperations {
    /// Stores the schema document under the fixed cache key, replacing
    /// any previous entry wholesale.
    pub fn store_schema(&self, schema: &FormSchema) -> Result<(), CacheError> {
        self.store_in_tree(&self.schemas_tree, STORAGE_KEY, schema)
    }

    /// Retrieves the cached schema document, if any.
    pub fn get_schema(&self) -> Result<Option<FormSchema>, CacheError> {
        self.get_from_tree(&self.schemas_tree, STORAGE_KEY)
    }

    /// Deletes the cached schema document, reporting whether one existed.
    pub fn delete_schema(&self) -> Result<bool, CacheError> {
        self.delete_from_tree(&self.schemas_tree, STORAGE_KEY)
    }

    /// Checks whether the fixed cache key currently has any value,
    /// regardless of its content.
    pub fn has_schema(&self) -> Result<bool, CacheError> {
        self.exists_in_tree(&self.schemas_tree, STORAGE_KEY)
    }
}
