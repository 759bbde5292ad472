//! Response writers shared by the card routes.

use salvo::Response;
use salvo::http::StatusCode;
use salvo::http::header::{CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE, HeaderName};
use url::form_urlencoded;

use cardqr_core::constants::VCARD_CONTENT_TYPE;
use cardqr_service::card::GeneratedCard;

pub const VCARD_CACHE_CONTROL: &str = "no-cache";
pub const IMAGE_CACHE_CONTROL: &str = "public, max-age=3600";

fn set_header(res: &mut Response, name: HeaderName, value: &str) {
    let label = name.as_str().to_owned();
    if let Err(e) = res.add_header(name, value, true) {
        tracing::warn!(header = %label, error = %e, "Failed to set response header");
    }
}

fn write_body(res: &mut Response, body: Vec<u8>) {
    if let Err(e) = res.write_body(body) {
        tracing::error!(error = %e, "Failed to write response body");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
    }
}

/// ## Summary
/// Builds an `attachment` disposition for `filename`.
///
/// Names outside printable ASCII get an underscore-substituted `filename`
/// plus an RFC 5987 `filename*` carrying the UTF-8 original.
#[must_use]
pub fn content_disposition(filename: &str) -> String {
    let plain = |c: char| c.is_ascii_graphic() && c != '"' && c != '\\';

    if filename.chars().all(plain) {
        return format!("attachment; filename=\"{filename}\"");
    }

    let fallback: String = filename
        .chars()
        .map(|c| if plain(c) { c } else { '_' })
        .collect();
    let encoded: String = form_urlencoded::byte_serialize(filename.as_bytes()).collect();
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}

/// ## Summary
/// Sends `card` as a vCard download.
///
/// ## Side Effects
/// Sets 200, the vCard content type, an attachment disposition and
/// `Cache-Control: no-cache`.
pub fn write_vcard(res: &mut Response, card: GeneratedCard) {
    res.status_code(StatusCode::OK);
    set_header(res, CONTENT_TYPE, VCARD_CONTENT_TYPE);
    set_header(res, CONTENT_DISPOSITION, &content_disposition(&card.filename));
    set_header(res, CACHE_CONTROL, VCARD_CACHE_CONTROL);
    write_body(res, card.vcard.into_bytes());
}

/// Sends raw image bytes, cacheable for an hour.
pub fn write_image(res: &mut Response, content_type: &str, body: Vec<u8>) {
    res.status_code(StatusCode::OK);
    set_header(res, CONTENT_TYPE, content_type);
    set_header(res, CACHE_CONTROL, IMAGE_CACHE_CONTROL);
    write_body(res, body);
}
