use thiserror::Error;

#[derive(Debug, Error)]
pub enum PfaFiscalError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PfaFiscalError {
    fn from(e: serde_json::Error) -> Self {
        PfaFiscalError::SerializationError(e.to_string())
    }
}
