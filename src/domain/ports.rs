use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::AuthResult;

// Transport-level failure raised by an auth service implementation.
pub type ServiceError = Box<dyn std::error::Error + Send + Sync>;

// Port for the remote service that actually verifies credentials.
// A rejected login is Ok(AuthResult::Failure); Err means the call itself failed.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResult, ServiceError>;
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthResult, ServiceError>;
    async fn sign_out(&self) -> Result<(), ServiceError>;
    async fn refresh_token(&self, refresh_token: &str) -> Result<AuthResult, ServiceError>;
}

// Port for the key-value storage that keeps tokens across sessions.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn save_token(&self, token: &str) -> Result<(), String>;
    async fn get_token(&self) -> Result<Option<String>, String>;
    async fn clear_token(&self) -> Result<(), String>;
    async fn save_refresh_token(&self, token: &str) -> Result<(), String>;
    async fn get_refresh_token(&self) -> Result<Option<String>, String>;
    async fn clear_refresh_token(&self) -> Result<(), String>;
}

// Shared handles delegate so use cases can hold Arc<dyn Port>.
#[async_trait]
impl<T: AuthService + ?Sized> AuthService for Arc<T> {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResult, ServiceError> {
        (**self).sign_in(email, password).await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthResult, ServiceError> {
        (**self).sign_up(email, password, name).await
    }

    async fn sign_out(&self) -> Result<(), ServiceError> {
        (**self).sign_out().await
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<AuthResult, ServiceError> {
        (**self).refresh_token(refresh_token).await
    }
}

#[async_trait]
impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    async fn save_token(&self, token: &str) -> Result<(), String> {
        (**self).save_token(token).await
    }

    async fn get_token(&self) -> Result<Option<String>, String> {
        (**self).get_token().await
    }

    async fn clear_token(&self) -> Result<(), String> {
        (**self).clear_token().await
    }

    async fn save_refresh_token(&self, token: &str) -> Result<(), String> {
        (**self).save_refresh_token(token).await
    }

    async fn get_refresh_token(&self) -> Result<Option<String>, String> {
        (**self).get_refresh_token().await
    }

    async fn clear_refresh_token(&self) -> Result<(), String> {
        (**self).clear_refresh_token().await
    }
}
