//! Typed values exchanged with the session layer for a notify-change round trip
//!
//! Encoding and decoding of the actual SMB messages belongs to the session
//! layer. The watcher only builds a [`NotifyChangeRequest`] and reads the
//! fields of a [`NotifyChangeResponse`].

mod filter;
mod notify;

pub use filter::*;
pub use notify::*;
