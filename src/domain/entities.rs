use serde::{Deserialize, Serialize};
use std::fmt;

// Outcome of an auth operation. Exactly one variant is ever populated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthResult {
    Success {
        token: String,
        refresh_token: String,
    },
    Failure {
        error_message: String,
    },
}

impl AuthResult {
    pub fn success(token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        AuthResult::Success {
            token: token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    pub fn failure(error_message: impl Into<String>) -> Self {
        AuthResult::Failure {
            error_message: error_message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AuthResult::Success { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            AuthResult::Success { token, .. } => Some(token),
            AuthResult::Failure { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AuthResult::Success { .. } => None,
            AuthResult::Failure { error_message } => Some(error_message),
        }
    }
}

// Sign-in input. Lives only for the duration of one call.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Sign-up input.
#[derive(Clone)]
pub struct SignUpDetails {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl SignUpDetails {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }
}

// Passwords never reach logs through Debug.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for SignUpDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpDetails")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

// Token pair held by local storage between process runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: Option<String>,
    pub refresh_token: Option<String>,
}
