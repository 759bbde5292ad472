use salvo::async_trait;

use crate::error::AppResult;
use cardqr_core::error::CoreError;
use cardqr_service::card::CardService;

pub struct CardServiceHandler {
    pub service: CardService,
}

#[async_trait]
impl salvo::Handler for CardServiceHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(self.service.clone());
    }
}

/// ## Summary
/// Retrieves the card service from the depot.
///
/// ## Errors
/// Returns an error if the card service is not found in the depot.
pub fn get_card_service_from_depot(depot: &salvo::Depot) -> AppResult<CardService> {
    depot
        .obtain::<CardService>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Card service not found in depot").into())
}
