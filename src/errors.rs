//! Change-notify Error Hierarchy
//!
//! Separates the outcomes a polling loop has to tell apart:
//! - precondition and capability failures raised by the watcher itself
//! - transport failures raised by the session layer and passed through unmodified
//! - close-time failures, kept distinct from the round trip that preceded them
//! - configuration loading/validation failures

use std::time::Duration;

use config::ConfigError;

use crate::Capability;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Watch preconditions not met (broken handle, missing capability)
    #[error(transparent)]
    Watch(#[from] WatchError),

    /// Session/transport failures raised while acquiring a connection or
    /// during the notify round trip
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Releasing the bound handle failed
    #[error("Failed to close handle: {0}")]
    Close(#[source] TransportError),

    /// Configuration loading or validation failures
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// True when the watch was rejected because its handle is no longer valid
    pub fn is_broken_watch(&self) -> bool {
        matches!(self, Error::Watch(WatchError::BrokenWatch))
    }

    /// True when the connection lacks the capability the notify request needs
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Watch(WatchError::UnsupportedOperation { .. }))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// The handle was invalidated by a tree/connection disconnect, or was
    /// torn down by the peer in an earlier round trip
    #[error("Watch was broken by tree disconnect")]
    BrokenWatch,

    /// The negotiated session does not support the requested operation
    #[error("{operation} is not supported without {capability}")]
    UnsupportedOperation {
        operation: &'static str,
        capability: Capability,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Session, tree or socket went away
    #[error("Connection lost: {0}")]
    Disconnected(String),

    /// The session layer gave up waiting for a response
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The response could not be decoded
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Low-level socket errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
