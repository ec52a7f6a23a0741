use crate::FileAction;
use crate::FileNotifyInformation;
use crate::NotifyChangeResponse;

static LOGGER_INIT: once_cell::sync::Lazy<()> = once_cell::sync::Lazy::new(|| {
    let _ = env_logger::builder().is_test(true).try_init();
});

pub(crate) fn enable_logger() {
    *LOGGER_INIT;
}

pub(crate) fn added(name: &str) -> FileNotifyInformation {
    FileNotifyInformation::new(FileAction::Added, name)
}

pub(crate) fn removed(name: &str) -> FileNotifyInformation {
    FileNotifyInformation::new(FileAction::Removed, name)
}

pub(crate) fn modified(name: &str) -> FileNotifyInformation {
    FileNotifyInformation::new(FileAction::Modified, name)
}

pub(crate) fn response(
    status: u32,
    changes: Vec<FileNotifyInformation>,
) -> NotifyChangeResponse {
    NotifyChangeResponse::new(status, changes)
}
