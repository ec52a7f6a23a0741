use std::time::Duration;

// -
// NT status codes carried by notify-change responses

/// The peer tore the watch down (handle closed or tree disconnected server-side)
pub const STATUS_NOTIFY_CLEANUP: u32 = 0x0000_010B;

/// Pending changes did not fit the server-side notify buffer; the client
/// has to re-enumerate the directory
pub const STATUS_NOTIFY_ENUM_DIR: u32 = 0x0000_010C;

pub const STATUS_SUCCESS: u32 = 0x0000_0000;

// -
// Negotiated capability bits

/// NT SMBs, required for NT_TRANSACT requests such as NOTIFY_CHANGE
pub const CAP_NT_SMBS: u32 = 0x0000_0010;

/// Name of the request the watcher issues, used in error messages and traces
pub const NOTIFY_CHANGE_OPERATION: &str = "NT_TRANSACT_NOTIFY_CHANGE";

// -
// Notify buffer

/// Server-side notify buffer requested when nothing else is configured
pub const DEFAULT_NOTIFY_BUFFER_SIZE: u32 = 1024;

/// Largest notify buffer a request may ask for
pub const MAX_NOTIFY_BUFFER_SIZE: u32 = 0x10000;

// -
// Handle release

/// Close disposition used by the watcher: release immediately, no linger
pub const NO_LINGER: Duration = Duration::ZERO;
