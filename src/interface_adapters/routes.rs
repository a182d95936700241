use crate::interface_adapters::handlers::{
    auth_state, refresh, sign_in, sign_out, sign_up, stored_token,
};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/session/sign-in", post(sign_in))
        .route("/session/sign-up", post(sign_up))
        .route("/session/sign-out", post(sign_out))
        .route("/session/refresh", post(refresh))
        .route("/session/token", get(stored_token))
        .route("/session/state", get(auth_state))
        .with_state(state)
}
