use tokio::time::Instant;
use tracing::trace;

use crate::FileId;

/// Traces how long a notify round trip stayed outstanding
pub(crate) struct ScopedTimer {
    start: Instant,
    name: &'static str,
    file_id: FileId,
}

impl ScopedTimer {
    pub(crate) fn new(
        name: &'static str,
        file_id: FileId,
    ) -> Self {
        Self {
            start: Instant::now(),
            name,
            file_id,
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        trace!(target: "timing", "[TIMING] {} on fid {} took {} ms", self.name, self.file_id, elapsed.as_millis());
    }
}
