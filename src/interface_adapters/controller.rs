//! Caller-owned auth state for a front end.
//!
//! The controller wraps [`AuthOrchestrator`] and publishes an [`AuthState`]
//! snapshot through a `watch` channel whenever a flag changes. Operations on
//! one controller run one at a time, so the published state always reflects
//! the most recently *started* call rather than whichever response landed last.

use tokio::sync::{Mutex, watch};

use crate::domain::entities::AuthResult;
use crate::use_cases::orchestrator::AuthOrchestrator;

/// Observable flags for a login screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub is_authenticated: bool,
}

pub struct AuthController {
    orchestrator: AuthOrchestrator,
    state: watch::Sender<AuthState>,
    // Held for the whole of each operation.
    in_flight: Mutex<()>,
}

impl AuthController {
    pub fn new(orchestrator: AuthOrchestrator) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            orchestrator,
            state,
            in_flight: Mutex::new(()),
        }
    }

    pub fn orchestrator(&self) -> &AuthOrchestrator {
        &self.orchestrator
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult {
        let _guard = self.in_flight.lock().await;
        self.begin();
        let result = self.orchestrator.sign_in(email, password).await;
        self.finish(&result);
        result
    }

    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> AuthResult {
        let _guard = self.in_flight.lock().await;
        self.begin();
        let result = self.orchestrator.sign_up(email, password, name).await;
        self.finish(&result);
        result
    }

    pub async fn refresh_session(&self) -> AuthResult {
        let _guard = self.in_flight.lock().await;
        self.begin();
        let result = self.orchestrator.refresh_session().await;
        self.finish(&result);
        result
    }

    pub async fn sign_out(&self) {
        let _guard = self.in_flight.lock().await;
        self.begin();
        self.orchestrator.sign_out().await;
        self.state.send_modify(|state| {
            state.is_loading = false;
            state.is_authenticated = false;
        });
    }

    /// Start-up check: authenticated iff a token is already stored.
    pub async fn restore_session(&self) -> bool {
        let _guard = self.in_flight.lock().await;
        self.state.send_modify(|state| state.is_loading = true);

        let authenticated = match self.orchestrator.get_stored_token().await {
            Ok(token) => token.is_some_and(|token| !token.is_empty()),
            Err(err) => {
                tracing::warn!(error = %err, "could not read stored token");
                false
            }
        };

        self.state.send_modify(|state| {
            state.is_loading = false;
            state.is_authenticated = authenticated;
        });
        authenticated
    }

    pub fn clear_error(&self) {
        self.state.send_if_modified(|state| state.error_message.take().is_some());
    }

    fn begin(&self) {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error_message = None;
        });
    }

    fn finish(&self, result: &AuthResult) {
        self.state.send_modify(|state| {
            state.is_loading = false;
            state.is_authenticated = result.is_success();
            state.error_message = result.error_message().map(str::to_string);
        });
    }
}
