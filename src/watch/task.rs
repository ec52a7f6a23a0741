use std::sync::Arc;

use tokio::task::JoinHandle;

use super::WatchContext;
use crate::FileHandle;
use crate::FileNotifyInformation;
use crate::Result;

/// One [`WatchContext::watch`] call packaged as a task
///
/// Adds nothing to the call: no loop, no retry, no buffering. The task's
/// outcome is exactly the outcome of the watch.
pub struct WatchTask<H: FileHandle + ?Sized = dyn FileHandle> {
    context: Arc<WatchContext<H>>,
}

impl<H: FileHandle + ?Sized> WatchTask<H> {
    pub(super) fn new(context: Arc<WatchContext<H>>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &Arc<WatchContext<H>> {
        &self.context
    }

    /// Runs the watch on the current thread
    pub fn call(self) -> Result<Vec<FileNotifyInformation>> {
        self.context.watch()
    }
}

impl<H: FileHandle + ?Sized + 'static> WatchTask<H> {
    /// Runs the watch on tokio's blocking pool.
    ///
    /// # Panics
    /// Outside of a tokio runtime.
    pub fn spawn(self) -> JoinHandle<Result<Vec<FileNotifyInformation>>> {
        tokio::task::spawn_blocking(move || self.call())
    }
}
