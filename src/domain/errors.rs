use std::fmt;

// Domain-level errors for auth workflows. Display is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthError {
    MissingCredentials,
    MissingFields,
    InvalidEmail,
    PasswordTooShort,
    MissingRefreshToken,
    // Service or storage call failed before producing a result.
    Transport(String),
    SignOut(String),
    StorageFailure(String),
}

impl AuthError {
    // Locally detected input problems; these never reach the auth service.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AuthError::MissingCredentials
                | AuthError::MissingFields
                | AuthError::InvalidEmail
                | AuthError::PasswordTooShort
        )
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingCredentials => write!(f, "Email and password are required"),
            AuthError::MissingFields => write!(f, "All fields are required"),
            AuthError::InvalidEmail => write!(f, "Invalid email format"),
            AuthError::PasswordTooShort => write!(
                f,
                "Password must be at least {} characters",
                super::validation::MIN_PASSWORD_LEN
            ),
            AuthError::MissingRefreshToken => write!(f, "No refresh token available"),
            AuthError::Transport(cause) => write!(f, "Network error: {cause}"),
            AuthError::SignOut(cause) => write!(f, "Sign out error: {cause}"),
            AuthError::StorageFailure(cause) => write!(f, "Storage error: {cause}"),
        }
    }
}

impl std::error::Error for AuthError {}
