use serde::{Deserialize, Serialize};

// Request payload for sign in.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

// Request payload for sign up.
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

// Response payload for a successful sign in, sign up or refresh.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub refresh_token: String,
}

// Response payload for stored token lookup.
#[derive(Debug, Serialize)]
pub struct StoredTokenResponse {
    pub token: Option<String>,
}

// Response payload mirroring the controller flags.
#[derive(Debug, Serialize)]
pub struct AuthStateResponse {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub is_authenticated: bool,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
