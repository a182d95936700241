// Stub remote auth service used by the integration tests.
use axum::{Json, Router, http::StatusCode, routing::post};
use serde::Deserialize;
use serde_json::{Value, json};

// Account the stub accepts.
pub const KNOWN_EMAIL: &str = "pilot@example.com";
pub const KNOWN_PASSWORD: &str = "secret1";

#[derive(Deserialize)]
struct SignInBody {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct SignUpBody {
    email: String,
}

#[derive(Deserialize)]
struct RefreshBody {
    refresh_token: String,
}

async fn sign_in(Json(body): Json<SignInBody>) -> (StatusCode, Json<Value>) {
    if body.email == KNOWN_EMAIL && body.password == KNOWN_PASSWORD {
        return (
            StatusCode::OK,
            Json(json!({ "token": "access-1", "refresh_token": "refresh-1" })),
        );
    }
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Invalid credentials" })),
    )
}

async fn sign_up(Json(body): Json<SignUpBody>) -> (StatusCode, Json<Value>) {
    if body.email == KNOWN_EMAIL {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "message": "Email already registered" })),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({ "token": "access-new", "refresh_token": "refresh-new" })),
    )
}

async fn refresh(Json(body): Json<RefreshBody>) -> (StatusCode, Json<Value>) {
    if body.refresh_token == "refresh-1" {
        return (
            StatusCode::OK,
            Json(json!({ "token": "access-2", "refresh_token": "refresh-2" })),
        );
    }
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Refresh token expired" })),
    )
}

async fn sign_out() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

// Spawns the stub on an ephemeral port and returns its base URL.
pub async fn spawn_stub_auth_service() -> String {
    let app = Router::new()
        .route("/auth/sign-in", post(sign_in))
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/refresh", post(refresh))
        .route("/auth/sign-out", post(sign_out));

    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });

    format!("http://{addr}")
}

// Address that refuses connections, for transport failure paths.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}

// Spawns a stub whose replies carry no usable body: bare 500s and a 2xx
// that is not a token pair.
pub async fn spawn_broken_auth_service() -> String {
    let app = Router::new()
        .route(
            "/auth/sign-in",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route("/auth/sign-up", post(|| async { (StatusCode::OK, "not json") }))
        .route(
            "/auth/sign-out",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });

    format!("http://{addr}")
}
