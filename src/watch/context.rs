use std::fmt;
use std::sync::Arc;

use tracing::debug;
use tracing::trace;
use tracing::warn;

use super::WatchContextBuilder;
use super::WatchTask;
use crate::constants::NOTIFY_CHANGE_OPERATION;
use crate::constants::NO_LINGER;
use crate::scoped_timer::ScopedTimer;
use crate::Capability;
use crate::Error;
use crate::FileHandle;
use crate::FileNotifyInformation;
use crate::NotifyChangeRequest;
use crate::NotifyFilter;
use crate::NotifyStatus;
use crate::Result;
use crate::WatchError;

/// Blocking change-notify watch on an open directory handle
///
/// Every [`watch`](Self::watch) call performs exactly one notify round trip
/// and returns the batch of changes the server reported. Changes that happen
/// between two calls are buffered by the server for as long as the handle
/// stays open, so polling in a loop observes all of them, unless the server
/// buffer overflows, in which case the batch comes back empty and the caller
/// has to re-read the directory.
///
/// Besides the handle, the context owns only its immutable watch parameters
/// (filter, recursion, buffer size); whether
/// the watch is still alive is tracked by the handle alone. Dropping the
/// context closes the handle.
pub struct WatchContext<H: FileHandle + ?Sized = dyn FileHandle> {
    handle: Arc<H>,
    filter: NotifyFilter,
    recursive: bool,
    buffer_size: u32,
}

impl<H: FileHandle + ?Sized> WatchContext<H> {
    /// Creates a watch with the default notify buffer size
    pub fn new(
        handle: Arc<H>,
        filter: NotifyFilter,
        recursive: bool,
    ) -> Self {
        Self::builder(handle).filter(filter).recursive(recursive).build()
    }

    pub fn builder(handle: Arc<H>) -> WatchContextBuilder<H> {
        WatchContextBuilder::new(handle)
    }

    pub(super) fn from_parts(
        handle: Arc<H>,
        filter: NotifyFilter,
        recursive: bool,
        buffer_size: u32,
    ) -> Self {
        Self {
            handle,
            filter,
            recursive,
            buffer_size,
        }
    }

    pub fn handle(&self) -> &Arc<H> {
        &self.handle
    }

    pub fn filter(&self) -> NotifyFilter {
        self.filter
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    pub fn buffer_size(&self) -> u32 {
        self.buffer_size
    }

    /// Gets the next set of changes.
    ///
    /// Blocks until the server reports changes matching the filter, its
    /// buffer overflows, or the watch is torn down.
    ///
    /// # Returns
    /// - The changes in the order the server reported them
    /// - An empty list if the server buffer overflowed. Changes may have been
    ///   lost and the caller has to re-establish the directory state.
    /// - Whatever the response carried if the server terminated the watch;
    ///   the handle is marked closed and the next call fails fast
    ///
    /// # Errors
    /// - [`WatchError::BrokenWatch`] if the handle is no longer valid. No
    ///   connection is acquired in that case.
    /// - [`WatchError::UnsupportedOperation`] if the session lacks
    ///   [`Capability::NtSmbs`]. Nothing is sent.
    /// - [`Error::Transport`] for anything the session layer raises, unmodified
    pub fn watch(&self) -> Result<Vec<FileNotifyInformation>> {
        if !self.handle.is_valid() {
            return Err(WatchError::BrokenWatch.into());
        }

        // Released on every return path below
        let mut connection = self.handle.acquire_connection()?;

        if !connection.has_capability(Capability::NtSmbs) {
            return Err(WatchError::UnsupportedOperation {
                operation: NOTIFY_CHANGE_OPERATION,
                capability: Capability::NtSmbs,
            }
            .into());
        }

        let file_id = self.handle.file_id();
        let request = NotifyChangeRequest {
            file_id,
            completion_filter: self.filter,
            watch_tree: self.recursive,
            max_buffer_size: self.buffer_size,
        };

        trace!("Sending {} for fid {}", NOTIFY_CHANGE_OPERATION, file_id);
        let mut response = {
            let _timer = ScopedTimer::new(NOTIFY_CHANGE_OPERATION, file_id);
            connection.send(request)?
        };
        trace!(
            "Returned from {} for fid {} with status {:#010x}",
            NOTIFY_CHANGE_OPERATION,
            file_id,
            response.status
        );

        match response.notify_status() {
            NotifyStatus::Cleanup => {
                debug!(
                    file_id = %file_id,
                    changes = response.notify_information.len(),
                    "Watch terminated by peer, marking handle closed"
                );
                self.handle.mark_closed();
            }
            NotifyStatus::EnumDir => {
                debug!(
                    file_id = %file_id,
                    dropped = response.notify_information.len(),
                    "Notify buffer overflowed, changes may have been lost"
                );
                response.notify_information.clear();
            }
            NotifyStatus::Other(_) => {}
        }

        Ok(response.notify_information)
    }

    /// Closes the bound handle, cancelling the watch.
    ///
    /// Does nothing if the handle is already invalid, so repeated calls are
    /// safe. The handle is released without lingering.
    ///
    /// Closing is also how a [`watch`](Self::watch) blocked in another thread
    /// gets cancelled. This is best-effort: some servers keep an outstanding
    /// notify request pending after the handle is closed, and the blocked
    /// call then only returns once the server answers or the session fails.
    ///
    /// # Errors
    /// [`Error::Close`] if releasing the handle fails.
    pub fn close(&self) -> Result<()> {
        if self.handle.is_valid() {
            self.handle.close(NO_LINGER).map_err(Error::Close)?;
        }
        Ok(())
    }

    /// Single-shot task performing one [`watch`](Self::watch)
    pub fn task(self: &Arc<Self>) -> WatchTask<H> {
        WatchTask::new(Arc::clone(self))
    }
}

impl<H: FileHandle + ?Sized> Drop for WatchContext<H> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to close watched handle fid {}: {}", self.handle.file_id(), e);
        }
    }
}

impl<H: FileHandle + ?Sized> fmt::Debug for WatchContext<H> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("WatchContext")
            .field("file_id", &self.handle.file_id())
            .field("filter", &self.filter)
            .field("recursive", &self.recursive)
            .field("buffer_size", &self.buffer_size)
            .finish()
    }
}
