use thiserror::Error;

pub type Result<T> = std::result::Result<T, SwimlaneError>;

#[derive(Debug, Error)]
pub enum SwimlaneError {
    #[error("Invalid lane: {0}")]
    InvalidLane(String),

    #[error("Invalid card ID: {0:?}")]
    InvalidCardId(String),

    #[error("Duplicate card ID: {0}")]
    DuplicateCard(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
