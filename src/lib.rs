pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{AuthResult, AuthService, TokenStore};
pub use frameworks::server::{run, serve};
pub use interface_adapters::controller::{AuthController, AuthState};
pub use use_cases::orchestrator::AuthOrchestrator;
