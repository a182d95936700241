use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::domain::entities::AuthResult;
use crate::domain::ports::{AuthService, ServiceError};

// Thin wrapper around reqwest for calls to the remote auth service.
#[derive(Clone)]
pub struct HttpAuthService {
    http: Client,
    pub base_url: String,
}

#[derive(Debug, Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct RefreshBody<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenPair {
    token: String,
    #[serde(default)]
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug)]
pub enum AuthClientError {
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    Decode(reqwest::Error),
}

impl fmt::Display for AuthClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthClientError::Transport(err) => write!(f, "auth transport error: {err}"),
            AuthClientError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "auth upstream error {status}: {message}")
                } else {
                    write!(f, "auth upstream error {status}")
                }
            }
            AuthClientError::Decode(err) => write!(f, "auth response decode error: {err}"),
        }
    }
}

impl std::error::Error for AuthClientError {}

impl HttpAuthService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    // POSTs a credential payload and maps the reply onto an AuthResult.
    // Rejections by the service are results, not errors.
    async fn exchange<B>(&self, path: &str, body: &B) -> Result<AuthResult, ServiceError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        let res = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(AuthClientError::Transport)?;
        let status = res.status();

        if !status.is_success() {
            let message = upstream_message(res).await.unwrap_or_else(|| {
                format!("Request failed with status {}", status.as_u16())
            });
            tracing::debug!(%status, %message, path, "auth service rejected request");
            return Ok(AuthResult::failure(message));
        }

        let pair = res
            .json::<TokenPair>()
            .await
            .map_err(AuthClientError::Decode)?;

        Ok(AuthResult::success(pair.token, pair.refresh_token))
    }
}

async fn upstream_message(res: reqwest::Response) -> Option<String> {
    res.json::<ErrorBody>()
        .await
        .ok()
        .map(|payload| payload.message)
        .filter(|message| !message.is_empty())
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResult, ServiceError> {
        self.exchange("/auth/sign-in", &SignInBody { email, password })
            .await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthResult, ServiceError> {
        self.exchange(
            "/auth/sign-up",
            &SignUpBody {
                email,
                password,
                name,
            },
        )
        .await
    }

    async fn sign_out(&self) -> Result<(), ServiceError> {
        let url = format!("{}/auth/sign-out", self.base_url);
        let res = self
            .http
            .post(url)
            .send()
            .await
            .map_err(AuthClientError::Transport)?;
        let status = res.status();

        if !status.is_success() {
            let message = upstream_message(res).await;
            return Err(Box::new(AuthClientError::Upstream { status, message }));
        }

        Ok(())
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<AuthResult, ServiceError> {
        self.exchange("/auth/refresh", &RefreshBody { refresh_token })
            .await
    }
}
