pub mod entities;
pub mod errors;
pub mod ports;
pub mod validation;

// Re-export the domain boundary types and ports.
pub use entities::{AuthResult, Credentials, SignUpDetails, StoredSession};
pub use errors::AuthError;
pub use ports::{AuthService, ServiceError, TokenStore};
