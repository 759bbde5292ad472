use salvo::{Depot, Request, Response, handler};

use cardqr_rfc::rfc::vcard::ContactRecord;
use cardqr_service::card::GeneratedCard;

use crate::app::api::extract::{contact_from_json, contact_from_query};
use crate::app::api::response::write_vcard;
use crate::card_handler::get_card_service_from_depot;
use crate::error::AppResult;

fn generate(depot: &Depot, record: &ContactRecord) -> AppResult<GeneratedCard> {
    let service = get_card_service_from_depot(depot)?;
    Ok(service.vcard(record))
}

/// ## Summary
/// Serializes the JSON contact in the body and returns it as a `.vcf`
/// download.
///
/// ## Errors
/// 400 if the body is malformed or a name is missing.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn post_vcard(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let record = contact_from_json(req).await?;
    write_vcard(res, generate(depot, &record)?);
    Ok(())
}

/// ## Summary
/// Regenerates a card from share-link query parameters.
///
/// ## Errors
/// 400 if a name is missing.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn get_vcard(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let record = contact_from_query(req)?;
    write_vcard(res, generate(depot, &record)?);
    Ok(())
}
