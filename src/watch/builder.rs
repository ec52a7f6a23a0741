use std::sync::Arc;

use super::WatchContext;
use crate::constants::DEFAULT_NOTIFY_BUFFER_SIZE;
use crate::constants::MAX_NOTIFY_BUFFER_SIZE;
use crate::FileHandle;
use crate::NotifyConfig;
use crate::NotifyFilter;

/// Configurable construction of a [`WatchContext`]
///
/// Starts from the defaults of [`NotifyConfig`]; every setter overrides a
/// single parameter. The parameters are fixed once the context is built.
///
/// ```ignore
/// let ctx = WatchContext::builder(handle)
///     .filter(NotifyFilter::FILE_NAME | NotifyFilter::LAST_WRITE)
///     .recursive(true)
///     .buffer_size(8192)
///     .build();
/// ```
pub struct WatchContextBuilder<H: FileHandle + ?Sized = dyn FileHandle> {
    handle: Arc<H>,
    filter: NotifyFilter,
    recursive: bool,
    buffer_size: u32,
}

impl<H: FileHandle + ?Sized> WatchContextBuilder<H> {
    pub fn new(handle: Arc<H>) -> Self {
        let defaults = NotifyConfig::default();
        Self {
            handle,
            filter: defaults.completion_filter(),
            recursive: defaults.recursive,
            buffer_size: DEFAULT_NOTIFY_BUFFER_SIZE,
        }
    }

    /// Takes filter, recursion and buffer size from a loaded configuration
    pub fn with_config(
        mut self,
        config: &NotifyConfig,
    ) -> Self {
        self.filter = config.completion_filter();
        self.recursive = config.recursive;
        self.buffer_size = config.buffer_size;
        self
    }

    pub fn filter(
        mut self,
        filter: NotifyFilter,
    ) -> Self {
        self.filter = filter;
        self
    }

    pub fn recursive(
        mut self,
        recursive: bool,
    ) -> Self {
        self.recursive = recursive;
        self
    }

    /// Server-side notify buffer to request, in bytes
    ///
    /// Clamped to `1..=MAX_NOTIFY_BUFFER_SIZE` when the context is built.
    pub fn buffer_size(
        mut self,
        buffer_size: u32,
    ) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn build(self) -> WatchContext<H> {
        let buffer_size = self.buffer_size.clamp(1, MAX_NOTIFY_BUFFER_SIZE);
        WatchContext::from_parts(self.handle, self.filter, self.recursive, buffer_size)
    }
}
