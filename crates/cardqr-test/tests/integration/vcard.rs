//! Tests for the vCard download endpoints.
//!
//! Verifies line order, escaping, headers and validation through the full router.

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::*;

// ============================================================================
// POST /api/vcard
// ============================================================================

/// ## Summary
/// A fully populated contact produces every optional line in order.
#[test_log::test(tokio::test)]
async fn post_full_contact_line_order() {
    let service = create_test_service();

    let response = TestRequest::post("/api/vcard")
        .json_body(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "organization": "Analytical Engines, Ltd",
            "title": "Analyst",
            "email": "ada@example.com",
            "phone": "+44 20 1234",
            "mobile": "+44 77 5678",
            "website": "https://ada.example.com",
            "address": {
                "street": "12 St James's Square",
                "city": "London",
                "zip": "SW1Y 4JH",
                "country": "UK"
            },
            "photo": "aGVsbG8=",
            "note": "Line1\nLine2"
        }))
        .send(service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("content-disposition", "attachment; filename=\"Ada_Lovelace.vcf\"");

    let body = response.body_string();
    let lines: Vec<&str> = body.split("\r\n").collect();
    assert_eq!(
        lines,
        vec![
            "BEGIN:VCARD",
            "VERSION:3.0",
            "FN:Ada Lovelace",
            "N:Lovelace;Ada;;;",
            "ORG:Analytical Engines\\, Ltd",
            "TITLE:Analyst",
            "EMAIL;TYPE=INTERNET:ada@example.com",
            "TEL;TYPE=WORK,VOICE:+44 20 1234",
            "TEL;TYPE=CELL:+44 77 5678",
            "URL:https://ada.example.com",
            "ADR;TYPE=WORK:;;12 St James's Square;London;;SW1Y 4JH;UK",
            "PHOTO;ENCODING=b;TYPE=JPEG:aGVsbG8=",
            "NOTE:Line1\\nLine2",
            TEST_REV,
            "END:VCARD",
        ]
    );
}

#[test_log::test(tokio::test)]
async fn post_sets_download_headers() {
    let service = create_test_service();

    let _response = TestRequest::post("/api/vcard")
        .json_body(&json!({ "firstName": "John", "lastName": "Doe" }))
        .send(service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "text/vcard; charset=utf-8")
        .assert_header("cache-control", "no-cache")
        .assert_header_contains("content-disposition", "attachment;");
}

#[test_log::test(tokio::test)]
async fn post_without_content_type_still_parses() {
    let service = create_test_service();

    let _response = TestRequest::post("/api/vcard")
        .body(r#"{"firstName":"John","lastName":"Doe"}"#)
        .send(service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("N:Doe;John;;;");
}

#[test_log::test(tokio::test)]
async fn post_missing_first_name_is_400() {
    let service = create_test_service();

    let response = TestRequest::post("/api/vcard")
        .json_body(&json!({ "lastName": "Doe" }))
        .send(service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_header_contains("content-type", "application/json");

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "firstName is required");
}

#[test_log::test(tokio::test)]
async fn post_malformed_json_is_400() {
    let service = create_test_service();

    let response = TestRequest::post("/api/vcard")
        .header("content-type", "application/json")
        .body("not json")
        .send(service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|e| e.starts_with("Malformed request"))
    );
}

// ============================================================================
// GET /api/vcard
// ============================================================================

#[test_log::test(tokio::test)]
async fn get_long_names_win_over_aliases() {
    let service = create_test_service();

    let _response = TestRequest::get(
        "/api/vcard?fn=Short&firstName=Long&ln=Doe&organization=Full&org=Abbrev",
    )
    .send(service)
    .await
    .assert_status(StatusCode::OK)
    .assert_body_contains("FN:Long Doe\r\n")
    .assert_body_contains("ORG:Full\r\n")
    .assert_body_not_contains("Abbrev");
}

#[test_log::test(tokio::test)]
async fn get_escapes_query_values() {
    let service = create_test_service();

    let _response = TestRequest::get(
        "/api/vcard?firstName=John&lastName=Doe&title=CEO%2C%20CTO&note=a%5Cb",
    )
    .send(service)
    .await
    .assert_status(StatusCode::OK)
    .assert_body_contains("TITLE:CEO\\, CTO\r\n")
    .assert_body_contains("NOTE:a\\\\b\r\n");
}

#[test_log::test(tokio::test)]
async fn get_ignores_photo_parameter() {
    let service = create_test_service();

    let _response = TestRequest::get("/api/vcard?firstName=John&lastName=Doe&photo=aGk%3D")
        .send(service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_not_contains("PHOTO");
}

#[test_log::test(tokio::test)]
async fn get_missing_last_name_is_400() {
    let service = create_test_service();

    let _response = TestRequest::get("/api/vcard?firstName=John")
        .send(service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("lastName is required");
}
