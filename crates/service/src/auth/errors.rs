use thiserror::Error;

/// Business errors for the login workflow. The `Unauthorized` message is the
/// same for unknown accounts and wrong passwords so responses never leak
/// account existence.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing credentials")]
    Validation,
    #[error("Invalid credentials")]
    Unauthorized,
    #[error("Account disabled")]
    Disabled,
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("token error: {0}")]
    TokenError(String),
    #[error("repository error: {0}")]
    Repository(String),
}
