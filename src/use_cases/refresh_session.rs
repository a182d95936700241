use crate::domain::entities::AuthResult;
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthService, TokenStore};
use crate::use_cases::persist::persist_session;

// Exchanges the stored refresh token for a new token pair.
pub struct RefreshSessionUseCase<A, S> {
    pub auth: A,
    pub store: S,
}

impl<A, S> RefreshSessionUseCase<A, S>
where
    A: AuthService,
    S: TokenStore,
{
    #[tracing::instrument(name = "refresh_session", skip_all)]
    pub async fn execute(&self) -> AuthResult {
        match self.try_execute().await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, "session refresh failed");
                AuthResult::failure(err.to_string())
            }
        }
    }

    async fn try_execute(&self) -> Result<AuthResult, AuthError> {
        let refresh_token = self
            .store
            .get_refresh_token()
            .await
            .map_err(AuthError::Transport)?
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingRefreshToken)?;

        let result = self
            .auth
            .refresh_token(&refresh_token)
            .await
            .map_err(|err| AuthError::Transport(err.to_string()))?;

        persist_session(&self.store, &result).await?;

        Ok(result)
    }
}
