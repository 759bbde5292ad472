//! QR code rendering.
//!
//! ## Summary
//! The payload handed to a [`QrRenderer`] is the complete vCard document and
//! is encoded byte-for-byte; nothing here trims, re-encodes, or folds it.
//!
//! A symbol holds at most 2331 bytes in byte mode at level M (version 40).
//! Larger payloads, which usually means an embedded photo, fail with
//! [`ServiceError::Rendering`](crate::error::ServiceError::Rendering).

mod options;
mod renderer;

pub use options::{ErrorCorrection, MARGIN_RANGE, QrFormat, QrOptions, Rgb, WIDTH_RANGE};
pub use renderer::DefaultQrRenderer;

use crate::error::ServiceResult;

/// A rendered QR code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedQr {
    /// `data:image/png;base64,...`
    DataUrl(String),
    Png(Vec<u8>),
    Svg(String),
}

impl RenderedQr {
    /// Media type of the image, for `DataUrl` the embedded one.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::DataUrl(_) | Self::Png(_) => "image/png",
            Self::Svg(_) => "image/svg+xml",
        }
    }
}

/// Turns text into a QR image.
pub trait QrRenderer: Send + Sync {
    /// ## Errors
    /// Returns `ServiceError::Rendering` if the payload does not fit in a
    /// symbol or the image cannot be encoded.
    fn render(&self, payload: &str, format: QrFormat) -> ServiceResult<RenderedQr>;
}
