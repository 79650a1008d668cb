//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("CONFIG/{0}")]
    ConfigError(String),

    #[error("TRANSLATION/{0}")]
    TranslationError(String),

    #[error("SENSOR/{0}")]
    SensorError(String),

    #[error("RUNTIME/{0}")]
    RuntimeError(String),

    #[error("SERIALIZE/{0}")]
    SerializeError(String),
}

impl From<serde_json::Error> for AdvisorError {
    fn from(err: serde_json::Error) -> Self {
        AdvisorError::SerializeError(err.to_string())
    }
}
