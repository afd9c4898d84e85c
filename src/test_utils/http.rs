use axum::{body::Body, http::StatusCode, response::Response};
use scraper::{Html, Selector};

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    let content_type_header = response
        .headers()
        .get("content-type")
        .expect("content-type header missing");
    assert_eq!(content_type_header, content_type);
}

#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    let location = response
        .headers()
        .get("hx-redirect")
        .expect("expected response to have the header hx-redirect")
        .to_str()
        .expect("Could not convert to str");

    assert_eq!(
        location, endpoint,
        "got redirect to {location:?}, want redirect to {endpoint:?}"
    );
}

async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// Assert that `response` is an alert fragment showing `want_message`.
pub(crate) async fn assert_alert_message(response: Response<Body>, want_message: &str) {
    let html = parse_html_fragment(response).await;
    let message = html
        .select(&Selector::parse("[role=alert] .alert-message").unwrap())
        .next()
        .expect("No alert message found")
        .text()
        .collect::<String>();

    assert_eq!(want_message, message.trim());
}
