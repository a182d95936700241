use crate::interface_adapters::controller::AuthController;
use std::sync::Arc;

// Application state for the session facade.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<AuthController>,
}
