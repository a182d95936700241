use crate::domain::entities::{AuthResult, Credentials};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthService, TokenStore};
use crate::domain::validation::is_valid_email;
use crate::use_cases::persist::persist_session;

// Sign-in use case with injected dependencies.
pub struct SignInUseCase<A, S> {
    pub auth: A,
    pub store: S,
}

impl<A, S> SignInUseCase<A, S>
where
    A: AuthService,
    S: TokenStore,
{
    #[tracing::instrument(name = "sign_in", skip_all)]
    pub async fn execute(&self, credentials: Credentials) -> AuthResult {
        match self.try_execute(&credentials).await {
            Ok(result) => {
                if let Some(message) = result.error_message() {
                    tracing::info!(%message, "auth service rejected sign in");
                }
                result
            }
            Err(err) => {
                if err.is_validation() {
                    tracing::debug!(error = %err, "sign in input rejected");
                } else {
                    tracing::warn!(error = %err, "sign in failed");
                }
                AuthResult::failure(err.to_string())
            }
        }
    }

    async fn try_execute(&self, credentials: &Credentials) -> Result<AuthResult, AuthError> {
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if !is_valid_email(&credentials.email) {
            return Err(AuthError::InvalidEmail);
        }

        let result = self
            .auth
            .sign_in(&credentials.email, &credentials.password)
            .await
            .map_err(|err| AuthError::Transport(err.to_string()))?;

        persist_session(&self.store, &result).await?;

        Ok(result)
    }
}
