//! End-to-end share link tests.
//!
//! A share link returned by `POST /api/qr` must regenerate the same card.

use salvo::http::StatusCode;
use serde_json::json;
use url::Url;

use cardqr_test::app::api::qr::QrResponse;

use super::helpers::*;

async fn share_path(contact: &serde_json::Value) -> (String, QrResponse) {
    let response = TestRequest::post("/api/qr")
        .json_body(contact)
        .send(create_test_service())
        .await
        .assert_status(StatusCode::OK);

    let body: QrResponse = response.json();
    let url = Url::parse(&body.share_url).unwrap_or_else(|e| panic!("bad share URL: {e}"));
    assert_eq!(url.origin().ascii_serialization(), ORIGIN);

    let path = format!("{}?{}", url.path(), url.query().unwrap_or_default());
    (path, body)
}

#[test_log::test(tokio::test)]
async fn share_link_regenerates_card() {
    let contact = json!({
        "firstName": "Zoë",
        "lastName": "Müller",
        "organization": "Acme; Sons & Co",
        "title": "Head, Research",
        "email": "zoe@example.com",
        "phone": "+49 30 1234",
        "mobile": "+49 170 5678",
        "website": "https://example.com/?a=1&b=2",
        "address": { "street": "Hauptstr. 1", "city": "Berlin", "country": "DE" },
        "note": "Line1\nLine2"
    });

    let (path, posted) = share_path(&contact).await;

    let response = TestRequest::get(&path)
        .send(create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .assert_header_contains("content-disposition", "filename*=UTF-8''Zo%C3%AB_M%C3%BCller.vcf");

    assert_eq!(response.body_string(), posted.vcard);
}

#[test_log::test(tokio::test)]
async fn share_link_drops_photo() {
    let contact = json!({
        "firstName": "John",
        "lastName": "Doe",
        "photo": "aGVsbG8="
    });

    let (path, posted) = share_path(&contact).await;
    assert!(posted.vcard.contains("PHOTO;ENCODING=b;TYPE=JPEG:aGVsbG8="));
    assert!(!path.contains("photo"));

    let _response = TestRequest::get(&path)
        .send(create_test_service())
        .await
        .assert_status(StatusCode::OK)
        .assert_body_not_contains("PHOTO");
}
