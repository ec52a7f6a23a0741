//! Collaborator interfaces of the watcher
//!
//! The watcher never opens, reconnects or encodes anything itself. It works
//! against an already open [`FileHandle`] and borrows a [`Connection`] from it
//! for the duration of one notify round trip.

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use crate::Capability;
use crate::FileId;
use crate::NotifyChangeRequest;
use crate::NotifyChangeResponse;
use crate::TransportError;

/// Scoped access to the session a handle lives on
///
/// A connection is acquired per call and released when it is dropped, on
/// every exit path of the call that acquired it.
#[cfg_attr(test, automock)]
pub trait Connection: Send {
    /// Whether the negotiated session advertises `capability`
    fn has_capability(
        &self,
        capability: Capability,
    ) -> bool;

    /// Sends one notify-change request and blocks until its response arrives.
    ///
    /// # Errors
    /// Any transport failure (disconnect, timeout, undecodable response).
    /// Error statuses other than the notify-specific ones are expected to be
    /// reported here by the session layer, not through the response.
    fn send(
        &mut self,
        request: NotifyChangeRequest,
    ) -> std::result::Result<NotifyChangeResponse, TransportError>;
}

/// An open handle on a remote file or directory
///
/// Handles are stateful: they may become invalid at any time, for instance
/// when the peer drops the tree connect underneath them. Implementations must
/// be safe to share between the thread blocked in a watch and the thread
/// closing it.
#[cfg_attr(test, automock)]
pub trait FileHandle: Send + Sync {
    fn is_valid(&self) -> bool;

    /// Borrows the session this handle belongs to for one call.
    fn acquire_connection(&self) -> std::result::Result<Box<dyn Connection>, TransportError>;

    /// Remote identifier used in requests against this handle
    fn file_id(&self) -> FileId;

    /// Records that the peer already released this handle, so that no close
    /// request is sent for it and later validity checks fail fast.
    fn mark_closed(&self);

    /// Releases the handle on the server.
    ///
    /// `linger` bounds how long the release may wait for outstanding
    /// operations; `Duration::ZERO` releases immediately.
    fn close(
        &self,
        linger: Duration,
    ) -> std::result::Result<(), TransportError>;
}
