//! # smb-notify
//!
//! Blocking change-notification watcher for a handle opened on a remote
//! SMB/CIFS share.
//!
//! The crate does not talk to the network itself. It builds notify-change
//! requests, interprets their responses and manages the lifetime of the
//! watch, on top of a session layer supplied through two traits:
//!
//! - [`FileHandle`] - an open handle: validity, remote id, close
//! - [`Connection`] - per-call session access: capability query, send
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use smb_notify::{NotifyConfig, WatchContext};
//!
//! let config = NotifyConfig::new()?.validate()?;
//! let ctx = WatchContext::builder(Arc::new(handle)).with_config(&config).build();
//!
//! while let Ok(changes) = ctx.watch() {
//!     for change in changes {
//!         println!("{change}");
//!     }
//! }
//! ```
//!
//! ## Outcomes of a poll
//!
//! - a list of changes in server order
//! - an empty list: nothing fit the filter, or the server buffer overflowed
//!   and the directory must be re-read
//! - [`WatchError::BrokenWatch`] once the handle became invalid, including
//!   after the server tore the watch down
//! - [`WatchError::UnsupportedOperation`] if the session lacks NT SMBs
//! - [`TransportError`] from the session layer, unmodified

mod config;
pub mod constants;
mod errors;
mod handle;
mod protocol;
mod scoped_timer;
mod watch;

pub use self::config::*;
pub use errors::*;
pub use handle::*;
pub use protocol::*;
pub use watch::*;


//-----------------------------------------------------------
// Test utils
