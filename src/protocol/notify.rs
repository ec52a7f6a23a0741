use std::fmt;

use crate::constants::CAP_NT_SMBS;
use crate::constants::STATUS_NOTIFY_CLEANUP;
use crate::constants::STATUS_NOTIFY_ENUM_DIR;
use crate::NotifyFilter;

/// Remote identifier of an open handle (FID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(pub u64);

impl fmt::Display for FileId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Negotiated session capability the watcher may depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// NT SMBs, needed for NT_TRANSACT_NOTIFY_CHANGE
    NtSmbs,
}

impl Capability {
    pub fn bits(self) -> u32 {
        match self {
            Capability::NtSmbs => CAP_NT_SMBS,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Capability::NtSmbs => f.write_str("CAP_NT_SMBS"),
        }
    }
}

/// What happened to the entry named in a change record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileAction {
    Added,
    Removed,
    Modified,
    RenamedOldName,
    RenamedNewName,
    AddedStream,
    RemovedStream,
    ModifiedStream,
    /// Action code outside the protocol table, kept verbatim
    Unknown(u32),
}

impl FileAction {
    pub fn code(self) -> u32 {
        match self {
            FileAction::Added => 0x1,
            FileAction::Removed => 0x2,
            FileAction::Modified => 0x3,
            FileAction::RenamedOldName => 0x4,
            FileAction::RenamedNewName => 0x5,
            FileAction::AddedStream => 0x6,
            FileAction::RemovedStream => 0x7,
            FileAction::ModifiedStream => 0x8,
            FileAction::Unknown(code) => code,
        }
    }
}

impl From<u32> for FileAction {
    fn from(code: u32) -> Self {
        match code {
            0x1 => FileAction::Added,
            0x2 => FileAction::Removed,
            0x3 => FileAction::Modified,
            0x4 => FileAction::RenamedOldName,
            0x5 => FileAction::RenamedNewName,
            0x6 => FileAction::AddedStream,
            0x7 => FileAction::RemovedStream,
            0x8 => FileAction::ModifiedStream,
            other => FileAction::Unknown(other),
        }
    }
}

/// One change reported by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNotifyInformation {
    pub action: FileAction,
    /// Path relative to the watched directory
    pub file_name: String,
}

impl FileNotifyInformation {
    pub fn new(
        action: FileAction,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            action,
            file_name: file_name.into(),
        }
    }
}

impl fmt::Display for FileNotifyInformation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:?} {}", self.action, self.file_name)
    }
}

/// NT_TRANSACT_NOTIFY_CHANGE request parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyChangeRequest {
    pub file_id: FileId,
    pub completion_filter: NotifyFilter,
    /// Also report changes in subdirectories
    pub watch_tree: bool,
    /// Server-side buffer the client asks for, in bytes
    pub max_buffer_size: u32,
}

/// Decoded notify-change response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifyChangeResponse {
    pub status: u32,
    pub notify_information: Vec<FileNotifyInformation>,
}

impl NotifyChangeResponse {
    pub fn new(
        status: u32,
        notify_information: Vec<FileNotifyInformation>,
    ) -> Self {
        Self {
            status,
            notify_information,
        }
    }

    pub fn notify_status(&self) -> NotifyStatus {
        NotifyStatus::from(self.status)
    }
}

/// Classification of a notify-change response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyStatus {
    /// STATUS_NOTIFY_CLEANUP: the peer terminated the watch
    Cleanup,
    /// STATUS_NOTIFY_ENUM_DIR: the server-side buffer overflowed
    EnumDir,
    /// Any other status; the session layer has already accepted it
    Other(u32),
}

impl From<u32> for NotifyStatus {
    fn from(status: u32) -> Self {
        match status {
            STATUS_NOTIFY_CLEANUP => NotifyStatus::Cleanup,
            STATUS_NOTIFY_ENUM_DIR => NotifyStatus::EnumDir,
            other => NotifyStatus::Other(other),
        }
    }
}
