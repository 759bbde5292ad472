pub mod api;
#[cfg(test)]
pub(crate) mod test_support;

use salvo::Router;

use cardqr_core::config::Settings;
use cardqr_service::card::CardService;

use crate::card_handler::CardServiceHandler;
use crate::config::ConfigHandler;

/// ## Summary
/// Full application router: depot injection of the settings and card
/// service, then the API routes.
#[must_use]
pub fn router(settings: Settings, service: CardService) -> Router {
    Router::new()
        .hoop(ConfigHandler { settings })
        .hoop(CardServiceHandler { service })
        .push(api::routes())
}
