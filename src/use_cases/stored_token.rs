use crate::domain::errors::AuthError;
use crate::domain::ports::TokenStore;

// Reads the access token currently held in local storage.
pub struct StoredTokenUseCase<S> {
    pub store: S,
}

impl<S> StoredTokenUseCase<S>
where
    S: TokenStore,
{
    pub async fn execute(&self) -> Result<Option<String>, AuthError> {
        self.store
            .get_token()
            .await
            .map_err(AuthError::StorageFailure)
    }
}
