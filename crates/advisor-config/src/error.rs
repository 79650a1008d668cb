//! Configuration errors
use advisor_core::AdvisorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required key '{0}'")]
    MissingKey(&'static str),

    #[error("'{key}' must be {expected}")]
    InvalidType {
        key: &'static str,
        expected: &'static str,
    },

    #[error("'{key}' has unsupported value '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("'{key}' = {value} is outside {min}..={max}")]
    OutOfRange {
        key: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("state labels must be distinct (open '{open}', close '{close}', keep '{keep}')")]
    DuplicateLabels {
        open: String,
        close: String,
        keep: String,
    },

    /// Two entries would publish under the same entity id
    #[error("another entry already publishes '{0}'")]
    DuplicateEntry(String),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl From<ConfigError> for AdvisorError {
    fn from(err: ConfigError) -> Self {
        AdvisorError::ConfigError(err.to_string())
    }
}
