use std::{string::FromUtf8Error, time::Duration};

use crate::light::LightField;

/// All error types that can occur when talking to a hub.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Discovery failed: the query could not be sent, no reply was read, or
    /// the reply did not carry the expected address markers.
    #[error("hub discovery failed: {reason}")]
    Discovery { reason: String },

    /// The command port could not be reached.
    #[error("failed to connect to hub at {addr}: {err:?}")]
    Connection { addr: String, err: std::io::Error },

    /// A bounded wait elapsed before the hub answered.
    #[error("{action} timed out after {timeout:?}")]
    TimedOut { action: String, timeout: Duration },

    /// The hub answered with something the protocol does not allow.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A numeric field of a light record is not a valid integer.
    #[error("light {light:?}: field {field} has invalid value {value:?}")]
    Parse {
        light: String,
        field: LightField,
        value: String,
    },

    /// The requested light is not in the hub's current light list.
    #[error("light {0:?} not found on hub")]
    LightNotFound(String),

    /// A local socket operation failed.
    #[error("socket {action} error: {err:?}")]
    Socket { action: String, err: std::io::Error },

    /// A reply contained invalid UTF-8.
    #[error("utf8 decoding error: {0:?}")]
    Utf8Decode(FromUtf8Error),

    /// Failed to deserialize JSON configuration.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// Failed to parse a [`crate::Color`] from a string.
    #[error("invalid color string: {0}")]
    InvalidColorString(String),
}

impl Error {
    /// Create a new socket error
    pub fn socket(action: &str, err: std::io::Error) -> Self {
        Error::Socket {
            action: action.to_string(),
            err,
        }
    }

    /// Create a new discovery error
    pub fn discovery(reason: impl Into<String>) -> Self {
        Error::Discovery {
            reason: reason.into(),
        }
    }

    /// Create a new timeout error
    pub fn timed_out(action: &str, timeout: Duration) -> Self {
        Error::TimedOut {
            action: action.to_string(),
            timeout,
        }
    }

    /// Whether a fresh attempt could plausibly succeed.
    pub(crate) fn is_transient(&self) -> bool {
        matches!(self, Error::Connection { .. } | Error::TimedOut { .. })
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
