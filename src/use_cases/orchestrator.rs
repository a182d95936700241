use std::sync::Arc;

use crate::domain::entities::{AuthResult, Credentials, SignUpDetails};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthService, TokenStore};
use crate::use_cases::refresh_session::RefreshSessionUseCase;
use crate::use_cases::sign_in::SignInUseCase;
use crate::use_cases::sign_out::SignOutUseCase;
use crate::use_cases::sign_up::SignUpUseCase;
use crate::use_cases::stored_token::StoredTokenUseCase;

/// Single entry point over the auth use cases.
///
/// Holds no state of its own between calls: every operation builds its use
/// case from the shared service and store handles. Overlapping calls are not
/// serialized here; see `AuthController` for that.
#[derive(Clone)]
pub struct AuthOrchestrator {
    auth: Arc<dyn AuthService>,
    store: Arc<dyn TokenStore>,
}

impl AuthOrchestrator {
    pub fn new(auth: Arc<dyn AuthService>, store: Arc<dyn TokenStore>) -> Self {
        Self { auth, store }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult {
        SignInUseCase {
            auth: self.auth.clone(),
            store: self.store.clone(),
        }
        .execute(Credentials::new(email, password))
        .await
    }

    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> AuthResult {
        SignUpUseCase {
            auth: self.auth.clone(),
            store: self.store.clone(),
        }
        .execute(SignUpDetails::new(email, password, name))
        .await
    }

    pub async fn sign_out(&self) {
        SignOutUseCase {
            auth: self.auth.clone(),
            store: self.store.clone(),
        }
        .execute()
        .await
    }

    pub async fn refresh_session(&self) -> AuthResult {
        RefreshSessionUseCase {
            auth: self.auth.clone(),
            store: self.store.clone(),
        }
        .execute()
        .await
    }

    pub async fn get_stored_token(&self) -> Result<Option<String>, AuthError> {
        StoredTokenUseCase {
            store: self.store.clone(),
        }
        .execute()
        .await
    }
}
