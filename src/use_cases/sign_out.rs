use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthService, TokenStore};

// Sign-out use case. Failures are logged and never surfaced.
pub struct SignOutUseCase<A, S> {
    pub auth: A,
    pub store: S,
}

impl<A, S> SignOutUseCase<A, S>
where
    A: AuthService,
    S: TokenStore,
{
    #[tracing::instrument(name = "sign_out", skip_all)]
    pub async fn execute(&self) {
        if let Err(err) = self.auth.sign_out().await {
            let err = AuthError::SignOut(err.to_string());
            tracing::warn!(error = %err, "auth service sign out failed");
        }

        // Local tokens are dropped even when the remote call failed.
        if let Err(cause) = self.store.clear_token().await {
            let err = AuthError::SignOut(cause);
            tracing::warn!(error = %err, "failed to clear stored token");
        }
        if let Err(cause) = self.store.clear_refresh_token().await {
            let err = AuthError::SignOut(cause);
            tracing::warn!(error = %err, "failed to clear stored refresh token");
        }
    }
}
