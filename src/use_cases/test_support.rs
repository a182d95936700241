use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::entities::{AuthResult, StoredSession};
use crate::domain::ports::{AuthService, ServiceError, TokenStore};

#[derive(Debug)]
pub(crate) struct FakeTransportError(pub(crate) &'static str);

impl fmt::Display for FakeTransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for FakeTransportError {}

// Scripted reply for the next service call.
#[derive(Clone)]
pub(crate) enum Reply {
    Result(AuthResult),
    Fail(&'static str),
}

#[derive(Default)]
struct ServiceCalls {
    sign_in: AtomicUsize,
    sign_up: AtomicUsize,
    sign_out: AtomicUsize,
    refresh: AtomicUsize,
}

// Auth service fake that replays scripted replies and counts calls.
#[derive(Clone)]
pub(crate) struct RecordingAuthService {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    calls: Arc<ServiceCalls>,
    last_refresh_token: Arc<Mutex<Option<String>>>,
    sign_in_emails: Arc<Mutex<Vec<String>>>,
    // Taken by the first sign_in, which then waits on it before replying.
    gate: Arc<Mutex<Option<Arc<Notify>>>>,
    fail_sign_out: bool,
}

impl RecordingAuthService {
    pub(crate) fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(ServiceCalls::default()),
            last_refresh_token: Arc::new(Mutex::new(None)),
            sign_in_emails: Arc::new(Mutex::new(Vec::new())),
            gate: Arc::new(Mutex::new(None)),
            fail_sign_out: false,
        }
    }

    pub(crate) fn replying(reply: Reply) -> Self {
        let service = Self::new();
        service.push_reply(reply);
        service
    }

    pub(crate) fn with_gate(self, gate: Arc<Notify>) -> Self {
        *self.gate.lock().expect("gate mutex poisoned") = Some(gate);
        self
    }

    pub(crate) fn sign_in_emails(&self) -> Vec<String> {
        self.sign_in_emails
            .lock()
            .expect("emails mutex poisoned")
            .clone()
    }

    pub(crate) fn with_failing_sign_out(mut self) -> Self {
        self.fail_sign_out = true;
        self
    }

    pub(crate) fn push_reply(&self, reply: Reply) {
        let mut guard = self.replies.lock().expect("replies mutex poisoned");
        guard.push_back(reply);
    }

    pub(crate) fn sign_in_calls(&self) -> usize {
        self.calls.sign_in.load(Ordering::SeqCst)
    }

    pub(crate) fn sign_up_calls(&self) -> usize {
        self.calls.sign_up.load(Ordering::SeqCst)
    }

    pub(crate) fn sign_out_calls(&self) -> usize {
        self.calls.sign_out.load(Ordering::SeqCst)
    }

    pub(crate) fn refresh_calls(&self) -> usize {
        self.calls.refresh.load(Ordering::SeqCst)
    }

    pub(crate) fn last_refresh_token(&self) -> Option<String> {
        self.last_refresh_token
            .lock()
            .expect("refresh mutex poisoned")
            .clone()
    }

    fn next_reply(&self) -> Result<AuthResult, ServiceError> {
        let mut guard = self.replies.lock().expect("replies mutex poisoned");
        match guard.pop_front() {
            Some(Reply::Result(result)) => Ok(result),
            Some(Reply::Fail(cause)) => Err(Box::new(FakeTransportError(cause))),
            None => Err(Box::new(FakeTransportError("no scripted reply"))),
        }
    }
}

#[async_trait]
impl AuthService for RecordingAuthService {
    async fn sign_in(&self, email: &str, _password: &str) -> Result<AuthResult, ServiceError> {
        self.calls.sign_in.fetch_add(1, Ordering::SeqCst);
        self.sign_in_emails
            .lock()
            .expect("emails mutex poisoned")
            .push(email.to_string());
        let gate = self.gate.lock().expect("gate mutex poisoned").take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.next_reply()
    }

    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
        _name: &str,
    ) -> Result<AuthResult, ServiceError> {
        self.calls.sign_up.fetch_add(1, Ordering::SeqCst);
        self.next_reply()
    }

    async fn sign_out(&self) -> Result<(), ServiceError> {
        self.calls.sign_out.fetch_add(1, Ordering::SeqCst);
        if self.fail_sign_out {
            return Err(Box::new(FakeTransportError("sign out failed")));
        }
        Ok(())
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<AuthResult, ServiceError> {
        self.calls.refresh.fetch_add(1, Ordering::SeqCst);
        *self
            .last_refresh_token
            .lock()
            .expect("refresh mutex poisoned") = Some(refresh_token.to_string());
        self.next_reply()
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub save: bool,
    // Fails only save_refresh_token.
    pub save_refresh: bool,
    pub get: bool,
    pub clear: bool,
}

// Token store fake with per-operation failure toggles.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    session: Arc<Mutex<StoredSession>>,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(StoredSession::default())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn seed(&self, token: Option<&str>, refresh_token: Option<&str>) {
        let mut guard = self.session.lock().expect("session mutex poisoned");
        guard.token = token.map(str::to_string);
        guard.refresh_token = refresh_token.map(str::to_string);
    }

    pub(crate) fn snapshot(&self) -> StoredSession {
        self.session.lock().expect("session mutex poisoned").clone()
    }
}

#[async_trait]
impl TokenStore for RecordingStore {
    async fn save_token(&self, token: &str) -> Result<(), String> {
        if self.failures.save {
            return Err("save failed".to_string());
        }
        self.session.lock().expect("session mutex poisoned").token = Some(token.to_string());
        Ok(())
    }

    async fn get_token(&self) -> Result<Option<String>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }
        Ok(self.session.lock().expect("session mutex poisoned").token.clone())
    }

    async fn clear_token(&self) -> Result<(), String> {
        if self.failures.clear {
            return Err("clear failed".to_string());
        }
        self.session.lock().expect("session mutex poisoned").token = None;
        Ok(())
    }

    async fn save_refresh_token(&self, token: &str) -> Result<(), String> {
        if self.failures.save || self.failures.save_refresh {
            return Err("disk full".to_string());
        }
        self.session.lock().expect("session mutex poisoned").refresh_token =
            Some(token.to_string());
        Ok(())
    }

    async fn get_refresh_token(&self) -> Result<Option<String>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }
        Ok(self
            .session
            .lock()
            .expect("session mutex poisoned")
            .refresh_token
            .clone())
    }

    async fn clear_refresh_token(&self) -> Result<(), String> {
        if self.failures.clear {
            return Err("clear failed".to_string());
        }
        self.session.lock().expect("session mutex poisoned").refresh_token = None;
        Ok(())
    }
}
