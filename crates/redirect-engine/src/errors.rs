use reroute_core_types::RerouteError;
use thiserror::Error;

/// Failure of the external navigate effect. Terminal for the event it
/// belongs to; the engine never retries, since a fresh navigation
/// re-triggers evaluation anyway.
#[derive(Debug, Error, Clone)]
#[error("{message}")]
pub struct NavigateError {
    message: String,
}

impl NavigateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<NavigateError> for RerouteError {
    fn from(value: NavigateError) -> Self {
        RerouteError::new(value.to_string())
    }
}
