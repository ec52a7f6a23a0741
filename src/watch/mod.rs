//! Change-notify watch over an open remote handle
//!
//! [`WatchContext`] issues one NT_TRANSACT_NOTIFY_CHANGE request per
//! [`watch`](WatchContext::watch) call and blocks until the server answers.
//! There is no background thread and no client-side queue: the caller drives
//! the polling loop and the server buffers changes in between.
//!
//! ```ignore
//! let ctx = WatchContext::new(handle, NotifyFilter::FILE_NAME | NotifyFilter::DIR_NAME, true);
//! loop {
//!     let changes = ctx.watch()?;
//!     if changes.is_empty() {
//!         // overflow or no qualifying change: rescan the directory
//!         continue;
//!     }
//!     for change in changes {
//!         println!("{change}");
//!     }
//! }
//! ```
//!
//! A watch blocked in one thread is cancelled by calling
//! [`close`](WatchContext::close) from another, on a best-effort basis.

mod builder;
mod context;
mod task;

pub use builder::*;
pub use context::*;
pub use task::*;
