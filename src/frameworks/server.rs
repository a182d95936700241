use crate::domain::ports::{AuthService, TokenStore};
use crate::frameworks::config::Config;
use crate::interface_adapters::clients::HttpAuthService;
use crate::interface_adapters::controller::AuthController;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::storage::{FileTokenStore, InMemoryTokenStore};
use crate::use_cases::orchestrator::AuthOrchestrator;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

// Logs go to stdout; LOG_FORMAT=json switches to one JSON object per line
// with the active use-case span attached.
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if json {
        fmt.json().with_current_span(true).init();
    } else {
        fmt.compact().init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Wires the remote auth service and token store behind one controller.
pub fn build_state(config: &Config) -> Result<AppState, reqwest::Error> {
    let auth: Arc<dyn AuthService> = Arc::new(HttpAuthService::new(
        config.auth_service_url.clone(),
        config.request_timeout(),
    )?);

    let store: Arc<dyn TokenStore> = match &config.token_store_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using file token store.");
            Arc::new(FileTokenStore::new(path.clone()))
        }
        None => {
            tracing::warn!("TOKEN_STORE_PATH not set; tokens will not survive a restart.");
            Arc::new(InMemoryTokenStore::new())
        }
    };

    let controller = AuthController::new(AuthOrchestrator::new(auth, store));
    Ok(AppState {
        controller: Arc::new(controller),
    })
}

// Serves the session facade on an already bound listener.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, routes::app(state)).await
}

pub async fn run() {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    init_tracing(matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json")));

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load config");
            return;
        }
    };
    tracing::debug!(auth_base_url = %config.auth_service_url, "auth client configured.");

    let state = match build_state(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to build auth client");
            return;
        }
    };

    // Pick up a session left over from a previous run.
    if state.controller.restore_session().await {
        tracing::info!("restored stored session.");
    }

    // The facade is for a local front end only.
    let addr = SocketAddr::from(([127, 0, 0, 1], config.http_port));
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "session facade could not bind");
            return;
        }
    };
    tracing::info!(%addr, "session facade listening");

    if let Err(e) = serve(listener, state).await {
        tracing::error!(error = %e, "session facade stopped");
    }
}
