mod app_specific;
pub mod extract;
pub mod qr;
pub mod response;
mod vcard;

use salvo::Router;

pub use cardqr_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, QR_ROUTE_COMPONENT, QR_ROUTE_PREFIX,
    VCARD_ROUTE_COMPONENT, VCARD_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the API router: health check, vCard download and QR rendering.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(vcard::routes())
        .push(qr::routes())
}
