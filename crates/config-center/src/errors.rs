use reroute_core_types::RerouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<ConfigError> for RerouteError {
    fn from(value: ConfigError) -> Self {
        RerouteError::new(value.to_string())
    }
}
