use salvo::prelude::Json;
use salvo::{Depot, Request, Response, handler};
use serde::{Deserialize, Serialize};

use cardqr_core::error::CoreError;
use cardqr_rfc::rfc::vcard::ContactRecord;
use cardqr_service::card::{default_record, share_link};
use cardqr_service::qr::{QrFormat, RenderedQr};

use crate::app::api::extract::{contact_from_json, contact_from_query};
use crate::app::api::response::write_image;
use crate::card_handler::get_card_service_from_depot;
use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult};

/// JSON body of a data-URL QR response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrResponse {
    /// `data:image/png;base64,...`
    pub qr_code: String,
    /// The exact text encoded in the symbol.
    pub vcard: String,
    pub share_url: String,
}

fn requested_format(req: &Request) -> QrFormat {
    QrFormat::from_param(req.query::<String>("format").as_deref())
}

/// ## Summary
/// Renders `record` and writes either the JSON envelope (data URL) or the
/// raw image.
///
/// ## Errors
/// 500 if the card does not fit in a QR symbol or the image cannot be
/// encoded.
fn respond(
    depot: &Depot,
    res: &mut Response,
    record: &ContactRecord,
    format: QrFormat,
) -> AppResult<()> {
    let service = get_card_service_from_depot(depot)?;
    let (card, image) = service.qr(record, format)?;
    let content_type = image.content_type();

    match image {
        RenderedQr::DataUrl(qr_code) => {
            let settings = get_config_from_depot(depot)?;
            res.render(Json(QrResponse {
                qr_code,
                vcard: card.vcard,
                share_url: share_link(&settings, record),
            }));
        }
        RenderedQr::Png(bytes) => write_image(res, content_type, bytes),
        RenderedQr::Svg(svg) => write_image(res, content_type, svg.into_bytes()),
    }
    Ok(())
}

/// ## Summary
/// Renders the JSON contact in the body as a QR data URL, together with the
/// vCard text and a share link.
///
/// ## Errors
/// 400 for a malformed body or missing name; 500 if rendering fails.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn post_qr(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let record = contact_from_json(req).await?;
    respond(depot, res, &record, QrFormat::DataUrl)
}

/// ## Summary
/// Renders a contact from share-link query parameters. `format` selects
/// `dataurl` (default), `png` or `svg`.
///
/// ## Errors
/// 400 for a missing name; 500 if rendering fails.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn get_qr(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let record = contact_from_query(req)?;
    respond(depot, res, &record, requested_format(req))
}

/// ## Summary
/// Renders the preset contact from `default_card`, honoring `format`.
///
/// ## Errors
/// 404 if no preset is configured; 500 if the preset is incomplete.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn get_default_qr(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<()> {
    let settings = get_config_from_depot(depot)?;
    let record = default_record(&settings)
        .map_err(|e| CoreError::ConfigError(format!("default_card: {e}")))?
        .ok_or(AppError::NotFound("default card"))?;
    respond(depot, res, &record, requested_format(req))
}
