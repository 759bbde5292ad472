use thiserror::Error;

/// Failures shared by every cardqr crate.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A configured value cannot be used.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Something the server itself should have set up is missing.
    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
