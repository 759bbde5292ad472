use salvo::http::StatusCode;
use salvo::prelude::Json;
use salvo::{Depot, Request, Response, Writer, async_trait};
use serde::Serialize;
use thiserror::Error;

use cardqr_rfc::error::RfcError;
use cardqr_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed request: {0}")]
    MalformedPayload(String),

    #[error("Not found: {0}")]
    NotFound(&'static str),

    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    RfcError(#[from] RfcError),

    #[error(transparent)]
    CoreError(#[from] cardqr_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// HTTP status reported to the client.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedPayload(_)
            | Self::RfcError(RfcError::MissingRequiredField(_))
            | Self::ServiceError(ServiceError::RfcError(RfcError::MissingRequiredField(_))) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceError(_) | Self::RfcError(_) | Self::CoreError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the client; server faults stay generic.
    fn public_message(&self) -> String {
        match self {
            Self::ServiceError(ServiceError::Rendering(_)) => {
                "Failed to generate QR code".to_string()
            }
            _ if self.status_code().is_server_error() => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    /// ## Summary
    /// Writes the status and a JSON `{ "error": ... }` body.
    ///
    /// ## Side Effects
    /// Logs client errors at `warn` and server errors at `error`.
    pub fn write_to(&self, res: &mut Response) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "Request failed");
        } else {
            tracing::warn!(error = %self, status = %status, "Request rejected");
        }

        res.status_code(status);
        res.render(Json(ErrorResponse {
            error: self.public_message(),
        }));
    }
}

#[async_trait]
impl Writer for AppError {
    async fn write(self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        self.write_to(res);
    }
}
