//! Contact card generation.

use std::sync::Arc;

use cardqr_core::config::Settings;
use cardqr_rfc::clock::{Clock, SystemClock};
use cardqr_rfc::rfc::vcard::{
    ContactInput, ContactRecord, filename, property_names, serialize_with_clock, share_url,
};

use crate::error::ServiceResult;
use crate::qr::{DefaultQrRenderer, QrFormat, QrOptions, QrRenderer, RenderedQr};

/// A serialized card and its download name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCard {
    pub vcard: String,
    pub filename: String,
}

/// Produces vCards and QR codes for contact records.
///
/// Cheap to clone; the clock and renderer are shared.
#[derive(Clone)]
pub struct CardService {
    clock: Arc<dyn Clock>,
    renderer: Arc<dyn QrRenderer>,
}

impl CardService {
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, renderer: Arc<dyn QrRenderer>) -> Self {
        Self { clock, renderer }
    }

    /// ## Summary
    /// Builds a service on the system clock and the default renderer
    /// configured from `settings.qr`.
    ///
    /// ## Errors
    /// Returns an error if the QR settings are invalid.
    pub fn from_settings(settings: &Settings) -> ServiceResult<Self> {
        let options = QrOptions::try_from(&settings.qr)?;
        Ok(Self::new(
            Arc::new(SystemClock),
            Arc::new(DefaultQrRenderer::new(options)),
        ))
    }

    /// Serializes `record` and derives its filename.
    #[must_use]
    pub fn vcard(&self, record: &ContactRecord) -> GeneratedCard {
        let vcard = serialize_with_clock(record, self.clock.as_ref());

        tracing::debug!(
            payload_bytes = vcard.len(),
            properties = ?property_names(record),
            "Generated vCard"
        );

        GeneratedCard {
            vcard,
            filename: filename(record),
        }
    }

    /// ## Summary
    /// Serializes `record` and renders the full vCard text as a QR code.
    ///
    /// ## Errors
    /// Returns `ServiceError::Rendering` if the renderer rejects the payload.
    pub fn qr(
        &self,
        record: &ContactRecord,
        format: QrFormat,
    ) -> ServiceResult<(GeneratedCard, RenderedQr)> {
        let card = self.vcard(record);
        let image = self.renderer.render(&card.vcard, format)?;
        Ok((card, image))
    }
}

impl std::fmt::Debug for CardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardService").finish_non_exhaustive()
    }
}

/// Link that regenerates `record` from this server's public origin.
#[must_use]
pub fn share_link(settings: &Settings, record: &ContactRecord) -> String {
    share_url(&settings.server.origin(), record)
}

/// ## Summary
/// Returns the preset contact from `settings.default_card`, if configured.
///
/// ## Errors
/// Returns `MissingRequiredField` if the preset lacks a first or last name.
pub fn default_record(settings: &Settings) -> ServiceResult<Option<ContactRecord>> {
    let Some(fields) = &settings.default_card else {
        return Ok(None);
    };

    let input = ContactInput::from_query_pairs(fields.iter().map(|(k, v)| (k, v.clone())));
    Ok(Some(ContactRecord::try_from(input)?))
}
