//! Tests for the health check endpoint.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn healthcheck_returns_ok() {
    let service = create_test_service();

    let _response = TestRequest::get("/api/app/healthcheck")
        .send(service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("OK");
}

#[test_log::test(tokio::test)]
async fn unknown_route_is_404() {
    let service = create_test_service();

    let _response = TestRequest::get("/api/nothing-here")
        .send(service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
