use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::Capability;
use crate::Connection;
use crate::FileHandle;
use crate::FileId;
use crate::NotifyChangeRequest;
use crate::NotifyChangeResponse;
use crate::TransportError;

type Scripted = std::result::Result<NotifyChangeResponse, TransportError>;

/// Session state shared between a [`FakeHandle`] and the connections it hands out
#[derive(Default)]
pub(crate) struct FakeSession {
    nt_smbs: AtomicBool,
    acquire_failure: Mutex<Option<TransportError>>,
    replies: Mutex<VecDeque<Scripted>>,
    sent: Mutex<Vec<NotifyChangeRequest>>,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

/// Handle whose notify responses are scripted up front
///
/// Each `acquire_connection` hands out a fresh [`ScriptedConnection`] that
/// pops the next scripted reply on `send`.
pub(crate) struct FakeHandle {
    file_id: FileId,
    valid: AtomicBool,
    marked_closed: AtomicUsize,
    closed: AtomicUsize,
    close_failure: Mutex<Option<TransportError>>,
    close_lingers: Mutex<Vec<Duration>>,
    session: Arc<FakeSession>,
}

impl FakeHandle {
    /// Valid handle on a session that supports NT SMBs
    pub(crate) fn new(file_id: u64) -> Self {
        let session = FakeSession::default();
        session.nt_smbs.store(true, Ordering::SeqCst);
        Self {
            file_id: FileId(file_id),
            valid: AtomicBool::new(true),
            marked_closed: AtomicUsize::new(0),
            closed: AtomicUsize::new(0),
            close_failure: Mutex::new(None),
            close_lingers: Mutex::new(Vec::new()),
            session: Arc::new(session),
        }
    }

    pub(crate) fn set_nt_smbs(
        &self,
        supported: bool,
    ) {
        self.session.nt_smbs.store(supported, Ordering::SeqCst);
    }

    pub(crate) fn reply(
        &self,
        response: NotifyChangeResponse,
    ) {
        self.session.replies.lock().push_back(Ok(response));
    }

    pub(crate) fn fail_send(
        &self,
        error: TransportError,
    ) {
        self.session.replies.lock().push_back(Err(error));
    }

    pub(crate) fn fail_acquire(
        &self,
        error: TransportError,
    ) {
        *self.session.acquire_failure.lock() = Some(error);
    }

    pub(crate) fn fail_close(
        &self,
        error: TransportError,
    ) {
        *self.close_failure.lock() = Some(error);
    }

    /// Simulates the tree being disconnected underneath the handle
    pub(crate) fn invalidate(&self) {
        self.valid.store(false, Ordering::SeqCst);
    }

    pub(crate) fn sent(&self) -> Vec<NotifyChangeRequest> {
        self.session.sent.lock().clone()
    }

    pub(crate) fn acquired(&self) -> usize {
        self.session.acquired.load(Ordering::SeqCst)
    }

    pub(crate) fn released(&self) -> usize {
        self.session.released.load(Ordering::SeqCst)
    }

    pub(crate) fn marked_closed(&self) -> usize {
        self.marked_closed.load(Ordering::SeqCst)
    }

    pub(crate) fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub(crate) fn close_lingers(&self) -> Vec<Duration> {
        self.close_lingers.lock().clone()
    }
}

impl FileHandle for FakeHandle {
    fn is_valid(&self) -> bool {
        self.valid.load(Ordering::SeqCst)
    }

    fn acquire_connection(&self) -> std::result::Result<Box<dyn Connection>, TransportError> {
        if let Some(error) = self.session.acquire_failure.lock().take() {
            return Err(error);
        }
        self.session.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedConnection {
            session: Arc::clone(&self.session),
        }))
    }

    fn file_id(&self) -> FileId {
        self.file_id
    }

    fn mark_closed(&self) {
        self.marked_closed.fetch_add(1, Ordering::SeqCst);
        self.valid.store(false, Ordering::SeqCst);
    }

    fn close(
        &self,
        linger: Duration,
    ) -> std::result::Result<(), TransportError> {
        self.close_lingers.lock().push(linger);
        if let Some(error) = self.close_failure.lock().take() {
            return Err(error);
        }
        self.closed.fetch_add(1, Ordering::SeqCst);
        self.valid.store(false, Ordering::SeqCst);
        Ok(())
    }
}

pub(crate) struct ScriptedConnection {
    session: Arc<FakeSession>,
}

impl Connection for ScriptedConnection {
    fn has_capability(
        &self,
        capability: Capability,
    ) -> bool {
        match capability {
            Capability::NtSmbs => self.session.nt_smbs.load(Ordering::SeqCst),
        }
    }

    fn send(
        &mut self,
        request: NotifyChangeRequest,
    ) -> std::result::Result<NotifyChangeResponse, TransportError> {
        self.session.sent.lock().push(request);
        self.session
            .replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::MalformedResponse("no scripted reply".into())))
    }
}

impl Drop for ScriptedConnection {
    fn drop(&mut self) {
        self.session.released.fetch_add(1, Ordering::SeqCst);
    }
}
