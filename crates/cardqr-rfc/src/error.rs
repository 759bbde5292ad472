use thiserror::Error;

/// Contact model and serialization errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("{0} is required")]
    MissingRequiredField(&'static str),

    #[error(transparent)]
    CoreError(#[from] cardqr_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
