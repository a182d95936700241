use crate::domain::entities::{AuthResult, SignUpDetails};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthService, TokenStore};
use crate::domain::validation::{is_valid_email, meets_password_length};
use crate::use_cases::persist::persist_session;

// Sign-up use case with injected dependencies.
pub struct SignUpUseCase<A, S> {
    pub auth: A,
    pub store: S,
}

impl<A, S> SignUpUseCase<A, S>
where
    A: AuthService,
    S: TokenStore,
{
    #[tracing::instrument(name = "sign_up", skip_all)]
    pub async fn execute(&self, details: SignUpDetails) -> AuthResult {
        match self.try_execute(&details).await {
            Ok(result) => {
                if let Some(message) = result.error_message() {
                    tracing::info!(%message, "auth service rejected sign up");
                }
                result
            }
            Err(err) => {
                if err.is_validation() {
                    tracing::debug!(error = %err, "sign up input rejected");
                } else {
                    tracing::warn!(error = %err, "sign up failed");
                }
                AuthResult::failure(err.to_string())
            }
        }
    }

    async fn try_execute(&self, details: &SignUpDetails) -> Result<AuthResult, AuthError> {
        validate(details)?;

        let result = self
            .auth
            .sign_up(&details.email, &details.password, &details.name)
            .await
            .map_err(|err| AuthError::Transport(err.to_string()))?;

        persist_session(&self.store, &result).await?;

        Ok(result)
    }
}

// Presence first, then format, then length.
fn validate(details: &SignUpDetails) -> Result<(), AuthError> {
    if details.email.is_empty() || details.password.is_empty() || details.name.is_empty() {
        return Err(AuthError::MissingFields);
    }
    if !is_valid_email(&details.email) {
        return Err(AuthError::InvalidEmail);
    }
    if !meets_password_length(&details.password) {
        return Err(AuthError::PasswordTooShort);
    }
    Ok(())
}
