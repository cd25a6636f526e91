pub mod errors;
pub mod fields;
pub mod schema;
pub use errors::SchemaError;
pub use fields::{
    BuilderMeta, DisplayOverrides, EnumOption, Field, FieldProps, FieldType, Prefill,
    ValueConstraints, Visibility,
};
pub use schema::FormSchema;
