use crate::domain::entities::AuthResult;
use crate::domain::errors::AuthError;
use crate::domain::ports::TokenStore;

// Writes the token pair of a successful result. Empty access tokens are not
// stored. The stored pair always comes from one result: an empty refresh token
// clears the old one, and a failed second write rolls the access token back.
pub(crate) async fn persist_session<S>(store: &S, result: &AuthResult) -> Result<(), AuthError>
where
    S: TokenStore + ?Sized,
{
    let AuthResult::Success {
        token,
        refresh_token,
    } = result
    else {
        return Ok(());
    };

    if token.is_empty() {
        return Ok(());
    }

    store
        .save_token(token)
        .await
        .map_err(AuthError::Transport)?;

    let second_write = if refresh_token.is_empty() {
        store.clear_refresh_token().await
    } else {
        store.save_refresh_token(refresh_token).await
    };

    if let Err(cause) = second_write {
        if let Err(rollback) = store.clear_token().await {
            tracing::error!(error = %rollback, "failed to roll back stored token");
        }
        return Err(AuthError::Transport(cause));
    }

    Ok(())
}
