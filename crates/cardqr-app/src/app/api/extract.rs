//! Contact records from request bodies and query strings.

use salvo::Request;
use url::form_urlencoded;

use cardqr_core::constants::MAX_CONTACT_BODY_BYTES;
use cardqr_rfc::rfc::vcard::{ContactInput, ContactRecord};

use crate::error::{AppError, AppResult};

/// ## Summary
/// Reads a JSON contact object from the request body.
///
/// The `Content-Type` header is not checked; the body either parses as a
/// contact or it does not.
///
/// ## Errors
/// Returns `MalformedPayload` if the body cannot be read or is not a contact
/// object, and `MissingRequiredField` if either name is absent.
pub async fn contact_from_json(req: &mut Request) -> AppResult<ContactRecord> {
    let body = req
        .payload_with_max_size(MAX_CONTACT_BODY_BYTES)
        .await
        .map_err(|e| AppError::MalformedPayload(e.to_string()))?;

    tracing::debug!(bytes = body.len(), "Request body read");

    let input: ContactInput =
        serde_json::from_slice(body).map_err(|e| AppError::MalformedPayload(e.to_string()))?;
    Ok(ContactRecord::try_from(input)?)
}

/// ## Summary
/// Reads a contact from share-link query parameters.
///
/// ## Errors
/// Returns `MissingRequiredField` if either name is absent.
pub fn contact_from_query(req: &Request) -> AppResult<ContactRecord> {
    let query = req.uri().query().unwrap_or_default();
    let input = ContactInput::from_query_pairs(form_urlencoded::parse(query.as_bytes()));
    Ok(ContactRecord::try_from(input)?)
}
