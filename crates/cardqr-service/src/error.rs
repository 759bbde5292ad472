use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("QR rendering failed: {0}")]
    Rendering(String),

    #[error(transparent)]
    RfcError(#[from] cardqr_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] cardqr_core::error::CoreError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
