use smb_notify::FileAction;
use smb_notify::FileHandle;
use smb_notify::FileNotifyInformation;
use smb_notify::NotifyConfig;
use smb_notify::NotifyFilter;
use smb_notify::WatchContext;

use crate::common::enable_logger;
use crate::common::InMemoryShare;

#[test]
fn test_poll_loop_sees_every_buffered_change_in_order() {
    enable_logger();
    let share = InMemoryShare::new();
    let handle = share.open(0x10);
    let ctx = WatchContext::new(handle.clone(), NotifyFilter::FILE_NAME, false);

    // arm the watch
    assert!(ctx.watch().unwrap().is_empty());

    share.record(FileAction::Added, "a.txt");
    share.record(FileAction::RenamedOldName, "a.txt");
    share.record(FileAction::RenamedNewName, "b.txt");
    let batch = ctx.watch().unwrap();
    assert_eq!(
        batch,
        vec![
            FileNotifyInformation::new(FileAction::Added, "a.txt"),
            FileNotifyInformation::new(FileAction::RenamedOldName, "a.txt"),
            FileNotifyInformation::new(FileAction::RenamedNewName, "b.txt"),
        ]
    );

    share.record(FileAction::Removed, "b.txt");
    assert_eq!(
        ctx.watch().unwrap(),
        vec![FileNotifyInformation::new(FileAction::Removed, "b.txt")]
    );
    assert!(handle.is_valid());
}

#[test]
fn test_overflowing_server_buffer_yields_empty_batch() {
    enable_logger();
    let share = InMemoryShare::new();
    let handle = share.open(0x11);
    let config = NotifyConfig {
        buffer_size: 64,
        ..NotifyConfig::default()
    }
    .validate()
    .unwrap();
    let ctx = WatchContext::builder(handle.clone()).with_config(&config).build();

    assert!(ctx.watch().unwrap().is_empty());
    for i in 0..10 {
        share.record(FileAction::Added, &format!("file-{i}.dat"));
    }

    assert!(ctx.watch().unwrap().is_empty());
    assert!(handle.is_valid());

    // buffering resumes after the overflow was reported
    share.record(FileAction::Modified, "x");
    assert_eq!(
        ctx.watch().unwrap(),
        vec![FileNotifyInformation::new(FileAction::Modified, "x")]
    );
}

#[test]
fn test_server_teardown_ends_the_loop() {
    enable_logger();
    let share = InMemoryShare::new();
    let handle = share.open(0x12);
    let ctx = WatchContext::new(handle.clone(), NotifyFilter::ALL, true);

    let mut batches = 0;
    share.record(FileAction::Added, "one");
    share.tear_down();
    let err = loop {
        match ctx.watch() {
            Ok(_) => batches += 1,
            Err(e) => break e,
        }
        assert!(batches < 10, "watch never broke");
    };

    assert!(err.is_broken_watch());
    assert_eq!(batches, 1);
    assert!(!handle.is_valid());
}

#[test]
fn test_close_then_watch_is_broken() {
    let share = InMemoryShare::new();
    let handle = share.open(0x13);
    let ctx = WatchContext::new(handle.clone(), NotifyFilter::DIR_NAME, false);

    ctx.close().unwrap();
    ctx.close().unwrap();

    assert!(!handle.is_valid());
    assert!(ctx.watch().unwrap_err().is_broken_watch());
}
