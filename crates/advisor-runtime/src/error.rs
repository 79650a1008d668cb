//! Runtime errors
use advisor_config::ConfigError;
use advisor_core::AdvisorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("advisor runtime is not running")]
    ChannelClosed,

    #[error("unknown config entry '{0}'")]
    UnknownEntry(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<RuntimeError> for AdvisorError {
    fn from(err: RuntimeError) -> Self {
        match err {
            RuntimeError::Config(err) => err.into(),
            other => AdvisorError::RuntimeError(other.to_string()),
        }
    }
}
