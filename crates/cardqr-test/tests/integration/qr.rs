//! Tests for the QR endpoints.
//!
//! Verifies the JSON envelope, format negotiation and the configured preset card.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use salvo::http::StatusCode;
use serde_json::json;

use cardqr_test::app::api::qr::QrResponse;

use super::helpers::*;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn decode_data_url(url: &str) -> Vec<u8> {
    let encoded = url
        .strip_prefix("data:image/png;base64,")
        .unwrap_or_else(|| panic!("not a PNG data URL: {url}"));
    STANDARD.decode(encoded).unwrap_or_else(|e| panic!("bad base64: {e}"))
}

// ============================================================================
// POST /api/qr
// ============================================================================

/// ## Summary
/// The envelope carries a PNG data URL, the encoded vCard text and a share
/// link on the configured origin.
#[test_log::test(tokio::test)]
async fn post_returns_envelope() {
    let service = create_test_service();

    let response = TestRequest::post("/api/qr")
        .json_body(&json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "john@x.com",
            "phone": "+1 555-1234"
        }))
        .send(service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header_contains("content-type", "application/json");

    let body: QrResponse = response.json();
    assert!(decode_data_url(&body.qr_code).starts_with(PNG_SIGNATURE));
    assert_eq!(
        body.vcard,
        "BEGIN:VCARD\r\n\
         VERSION:3.0\r\n\
         FN:John Doe\r\n\
         N:Doe;John;;;\r\n\
         EMAIL;TYPE=INTERNET:john@x.com\r\n\
         TEL;TYPE=WORK,VOICE:+1 555-1234\r\n\
         REV:20250601T123045Z\r\n\
         END:VCARD"
    );
    assert_eq!(
        body.share_url,
        format!("{ORIGIN}/api/vcard?firstName=John&lastName=Doe&email=john%40x.com&phone=%2B1+555-1234")
    );
}

#[test_log::test(tokio::test)]
async fn post_with_oversized_photo_is_500() {
    let service = create_test_service();

    let response = TestRequest::post("/api/qr")
        .json_body(&json!({
            "firstName": "John",
            "lastName": "Doe",
            "photo": "A".repeat(4000)
        }))
        .send(service)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Failed to generate QR code");
}

#[test_log::test(tokio::test)]
async fn post_missing_names_is_400() {
    let service = create_test_service();

    let _response = TestRequest::post("/api/qr")
        .json_body(&json!({ "organization": "Acme" }))
        .send(service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("firstName is required");
}

// ============================================================================
// GET /api/qr
// ============================================================================

#[test_log::test(tokio::test)]
async fn get_png_is_raw_image() {
    let service = create_test_service();

    let response = TestRequest::get("/api/qr?fn=Jane&ln=Roe&format=png")
        .send(service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "image/png")
        .assert_header("cache-control", "public, max-age=3600");

    assert!(response.body.starts_with(PNG_SIGNATURE));
}

#[test_log::test(tokio::test)]
async fn get_svg_uses_configured_colors() {
    let service = create_test_service();

    let _response = TestRequest::get("/api/qr?fn=Jane&ln=Roe&format=svg")
        .send(service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "image/svg+xml")
        .assert_header("cache-control", "public, max-age=3600")
        .assert_body_contains("fill=\"#1a1a1a\"")
        .assert_body_contains("fill=\"#fafafa\"");
}

#[test_log::test(tokio::test)]
async fn get_unknown_format_falls_back_to_data_url() {
    let service = create_test_service();

    let response = TestRequest::get("/api/qr?fn=Jane&ln=Roe&format=gif")
        .send(service)
        .await
        .assert_status(StatusCode::OK);

    let body: QrResponse = response.json();
    assert!(body.qr_code.starts_with("data:image/png;base64,"));
    assert_eq!(
        body.share_url,
        format!("{ORIGIN}/api/vcard?firstName=Jane&lastName=Roe")
    );
}

#[test_log::test(tokio::test)]
async fn get_without_names_is_400() {
    let service = create_test_service();

    let _response = TestRequest::get("/api/qr?format=png")
        .send(service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

// ============================================================================
// GET /api/qr/default
// ============================================================================

#[test_log::test(tokio::test)]
async fn default_card_not_configured_is_404() {
    let service = create_test_service();

    let _response = TestRequest::get("/api/qr/default")
        .send(service)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_body_contains("default card");
}

#[test_log::test(tokio::test)]
async fn default_card_renders_preset() {
    let service = create_default_card_service();

    let response = TestRequest::get("/api/qr/default")
        .send(service)
        .await
        .assert_status(StatusCode::OK);

    let body: QrResponse = response.json();
    assert!(body.vcard.contains("\r\nFN:Grace Hopper\r\n"));
    assert!(body.vcard.contains("\r\nORG:US Navy\r\n"));
    assert!(body.vcard.contains("\r\nADR;TYPE=WORK:;;;Arlington;;;\r\n"));
    assert_eq!(
        body.share_url,
        format!("{ORIGIN}/api/vcard?firstName=Grace&lastName=Hopper&org=US+Navy&city=Arlington")
    );
}

#[test_log::test(tokio::test)]
async fn default_card_honors_format() {
    let service = create_default_card_service();

    let _response = TestRequest::get("/api/qr/default?format=svg")
        .send(service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "image/svg+xml");
}
