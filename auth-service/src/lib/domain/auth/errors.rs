use thiserror::Error;

/// Error for credential input validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("user id must not be empty")]
    EmptyUserId,

    #[error("password must not be empty")]
    EmptyPassword,
}

/// Top-level error for authentication operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    // Input-shape errors (automatically converted via #[from])
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    // Domain-level errors
    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("wrong password")]
    WrongPassword,

    // Infrastructure errors
    #[error("repository error: {0}")]
    Repository(String),
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError::Repository(err.to_string())
    }
}
