use crate::domain::entities::AuthResult;
use crate::interface_adapters::protocol::{
    AuthStateResponse, ErrorResponse, SessionResponse, SignInRequest, SignUpRequest,
    StoredTokenResponse,
};
use crate::interface_adapters::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

type HandlerResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

// Handler for signing in through the controller.
#[tracing::instrument(name = "http_sign_in", skip_all)]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequest>,
) -> HandlerResult<SessionResponse> {
    let result = state.controller.sign_in(&body.email, &body.password).await;
    session_response(result)
}

// Handler for creating an account through the controller.
#[tracing::instrument(name = "http_sign_up", skip_all)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> HandlerResult<SessionResponse> {
    let result = state
        .controller
        .sign_up(&body.email, &body.password, &body.name)
        .await;
    session_response(result)
}

// Handler for exchanging the stored refresh token.
#[tracing::instrument(name = "http_refresh", skip_all)]
pub async fn refresh(State(state): State<AppState>) -> HandlerResult<SessionResponse> {
    let result = state.controller.refresh_session().await;
    session_response(result)
}

// Handler for signing out. Always succeeds.
#[tracing::instrument(name = "http_sign_out", skip_all)]
pub async fn sign_out(State(state): State<AppState>) -> StatusCode {
    state.controller.sign_out().await;
    StatusCode::NO_CONTENT
}

// Handler for reading the stored access token.
pub async fn stored_token(State(state): State<AppState>) -> HandlerResult<StoredTokenResponse> {
    let token = state
        .controller
        .orchestrator()
        .get_stored_token()
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "failed to read stored token");
            error_response(StatusCode::BAD_GATEWAY, &err.to_string())
        })?;

    Ok(Json(StoredTokenResponse { token }))
}

// Handler exposing the current controller flags.
pub async fn auth_state(State(state): State<AppState>) -> Json<AuthStateResponse> {
    let snapshot = state.controller.state();
    Json(AuthStateResponse {
        is_loading: snapshot.is_loading,
        error_message: snapshot.error_message,
        is_authenticated: snapshot.is_authenticated,
    })
}

fn session_response(result: AuthResult) -> HandlerResult<SessionResponse> {
    match result {
        AuthResult::Success {
            token,
            refresh_token,
        } => Ok(Json(SessionResponse {
            token,
            refresh_token,
        })),
        AuthResult::Failure { error_message } => {
            Err(error_response(StatusCode::UNAUTHORIZED, &error_message))
        }
    }
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}
