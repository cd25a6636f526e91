pub mod types;
pub mod validation;

// Re-export the commonly used types at the schema module level
pub use types::{Field, FieldType, FormSchema, SchemaError, Visibility};
pub use validation::{SchemaShape, SchemaValidator, IMPORT_SHAPE};
