//! vCard download routes.

mod handler;

use salvo::Router;

use cardqr_core::constants::VCARD_ROUTE_COMPONENT;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(VCARD_ROUTE_COMPONENT)
        .get(handler::get_vcard)
        .post(handler::post_vcard)
}
