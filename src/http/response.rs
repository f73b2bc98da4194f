//! HTTP response building module
//!
//! Builders for every status the server emits. Bodies of `HEAD` responses
//! are dropped here while `Content-Length` still reports the full size.

use super::mime;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

pub const NOT_FOUND_BODY: &str = "404 Not Found";
pub const METHOD_NOT_ALLOWED_BODY: &str = "405 Method Not Allowed";
pub const SERVER_ERROR_BODY: &str = "Server error.";

/// Build 200 response carrying resource bytes verbatim
pub fn build_asset_response(data: Bytes, content_type: &str, is_head: bool) -> Response<Full<Bytes>> {
    build_ok_response(data, content_type, is_head)
}

/// Build 200 JSON response
pub fn build_json_response(json: String, is_head: bool) -> Response<Full<Bytes>> {
    build_ok_response(Bytes::from(json), mime::APPLICATION_JSON, is_head)
}

fn build_ok_response(data: Bytes, content_type: &str, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            build_500_response()
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_plain_response(StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", mime::TEXT_PLAIN)
        .header("Allow", "GET, HEAD")
        .body(Full::new(Bytes::from_static(METHOD_NOT_ALLOWED_BODY.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from_static(METHOD_NOT_ALLOWED_BODY.as_bytes())))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    build_plain_response(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY)
}

fn build_plain_response(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", mime::TEXT_PLAIN)
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from_static(body.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            let mut response = Response::new(Full::new(Bytes::from_static(body.as_bytes())));
            *response.status_mut() = status;
            response
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response<Full<Bytes>>) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_404_response() {
        let response = build_404_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["Content-Type"], "text/plain");
        assert_eq!(body_of(response).await, "404 Not Found");
    }

    #[tokio::test]
    async fn test_500_response() {
        let response = build_500_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()["Content-Type"], "text/plain");
        assert_eq!(body_of(response).await, "Server error.");
    }

    #[tokio::test]
    async fn test_405_lists_allowed_methods() {
        let response = build_405_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()["Allow"], "GET, HEAD");
    }

    #[tokio::test]
    async fn test_head_keeps_length_drops_body() {
        let response = build_asset_response(Bytes::from_static(b"body{}"), mime::TEXT_CSS, true);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Content-Length"], "6");
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_json_response() {
        let response = build_json_response(r#"{"a":1}"#.to_string(), false);
        assert_eq!(response.headers()["Content-Type"], "application/json");
        assert_eq!(body_of(response).await, r#"{"a":1}"#);
    }
}
