use std::fmt;
use std::ops::BitOr;
use std::ops::BitOrAssign;

use serde::Deserialize;
use serde::Serialize;

/// Completion filter of a notify-change request
///
/// Bitmask of the change classes the server should report. Bits outside the
/// known flags are kept as-is and forwarded to the server unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotifyFilter(u32);

impl NotifyFilter {
    pub const FILE_NAME: NotifyFilter = NotifyFilter(0x0000_0001);
    pub const DIR_NAME: NotifyFilter = NotifyFilter(0x0000_0002);
    pub const ATTRIBUTES: NotifyFilter = NotifyFilter(0x0000_0004);
    pub const SIZE: NotifyFilter = NotifyFilter(0x0000_0008);
    pub const LAST_WRITE: NotifyFilter = NotifyFilter(0x0000_0010);
    pub const LAST_ACCESS: NotifyFilter = NotifyFilter(0x0000_0020);
    pub const CREATION: NotifyFilter = NotifyFilter(0x0000_0040);
    pub const EA: NotifyFilter = NotifyFilter(0x0000_0080);
    pub const SECURITY: NotifyFilter = NotifyFilter(0x0000_0100);
    pub const STREAM_NAME: NotifyFilter = NotifyFilter(0x0000_0200);
    pub const STREAM_SIZE: NotifyFilter = NotifyFilter(0x0000_0400);
    pub const STREAM_WRITE: NotifyFilter = NotifyFilter(0x0000_0800);

    /// Every change class defined by the protocol
    pub const ALL: NotifyFilter = NotifyFilter(0x0000_0FFF);

    pub const fn empty() -> Self {
        NotifyFilter(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        NotifyFilter(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set in `self`
    pub const fn contains(
        self,
        other: NotifyFilter,
    ) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for NotifyFilter {
    type Output = NotifyFilter;

    fn bitor(
        self,
        rhs: NotifyFilter,
    ) -> NotifyFilter {
        NotifyFilter(self.0 | rhs.0)
    }
}

impl BitOrAssign for NotifyFilter {
    fn bitor_assign(
        &mut self,
        rhs: NotifyFilter,
    ) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<NotifyFilterFlag> for NotifyFilter {
    fn from_iter<I: IntoIterator<Item = NotifyFilterFlag>>(iter: I) -> Self {
        iter.into_iter().fold(NotifyFilter::empty(), |acc, flag| acc | NotifyFilter::from(flag))
    }
}

impl fmt::Display for NotifyFilter {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Named completion-filter flag, as written in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyFilterFlag {
    FileName,
    DirName,
    Attributes,
    Size,
    LastWrite,
    LastAccess,
    Creation,
    Ea,
    Security,
    StreamName,
    StreamSize,
    StreamWrite,
}

impl From<NotifyFilterFlag> for NotifyFilter {
    fn from(flag: NotifyFilterFlag) -> Self {
        match flag {
            NotifyFilterFlag::FileName => NotifyFilter::FILE_NAME,
            NotifyFilterFlag::DirName => NotifyFilter::DIR_NAME,
            NotifyFilterFlag::Attributes => NotifyFilter::ATTRIBUTES,
            NotifyFilterFlag::Size => NotifyFilter::SIZE,
            NotifyFilterFlag::LastWrite => NotifyFilter::LAST_WRITE,
            NotifyFilterFlag::LastAccess => NotifyFilter::LAST_ACCESS,
            NotifyFilterFlag::Creation => NotifyFilter::CREATION,
            NotifyFilterFlag::Ea => NotifyFilter::EA,
            NotifyFilterFlag::Security => NotifyFilter::SECURITY,
            NotifyFilterFlag::StreamName => NotifyFilter::STREAM_NAME,
            NotifyFilterFlag::StreamSize => NotifyFilter::STREAM_SIZE,
            NotifyFilterFlag::StreamWrite => NotifyFilter::STREAM_WRITE,
        }
    }
}
