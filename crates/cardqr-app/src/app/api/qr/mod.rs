//! QR code routes.

mod handler;

use salvo::Router;

use cardqr_core::constants::QR_ROUTE_COMPONENT;

pub use handler::QrResponse;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(QR_ROUTE_COMPONENT)
        .get(handler::get_qr)
        .post(handler::post_qr)
        .push(Router::with_path("default").get(handler::get_default_qr))
}
