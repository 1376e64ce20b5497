use thiserror::Error;

#[derive(Debug, Error)]
pub enum RMoneyError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Arithmetic overflow in {context}")]
    ArithmeticOverflow { context: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl RMoneyError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        RMoneyError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(context: impl Into<String>) -> Self {
        RMoneyError::ArithmeticOverflow {
            context: context.into(),
        }
    }
}

impl From<serde_json::Error> for RMoneyError {
    fn from(e: serde_json::Error) -> Self {
        RMoneyError::SerializationError(e.to_string())
    }
}
