/// Errors raised while validating or interpreting a schema document.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Invalid field: {0}")]
    InvalidField(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<SchemaError> for String {
    fn from(error: SchemaError) -> String {
        error.to_string()
    }
}
