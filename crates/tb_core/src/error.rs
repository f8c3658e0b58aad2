use thiserror::Error;

/// Errors raised by the builder core.
///
/// All variants are recoverable validation failures. The presentation layer
/// is expected to prevent most of them up front (e.g. disabling "Add" when
/// all technique slots are filled), but the core validates every call and
/// rejects invalid input instead of corrupting state.
#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Capacity exceeded: {what} is limited to {limit} entries")]
    CapacityExceeded { what: &'static str, limit: usize },

    #[error("Index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BuilderError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        BuilderError::InvalidInput { message: message.into() }
    }

    /// Stable machine-readable code for the API envelope.
    pub fn code(&self) -> &'static str {
        match self {
            BuilderError::InvalidInput { .. } => "INVALID_INPUT",
            BuilderError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            BuilderError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            BuilderError::Serialization(_) => "INVALID_JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, BuilderError>;
