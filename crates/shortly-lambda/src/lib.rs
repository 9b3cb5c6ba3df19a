//! AWS Lambda transport for the short link service.
//!
//! The HTTP trigger supplies the method, the `shortCode` path parameter
//! and the raw body; the answer goes back as an API Gateway response.

use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::http::{HeaderValue, StatusCode};
use lambda_http::{Body, Error, Request, RequestExt, Response};
use shortly_shortener::{LinkRequest, LinkResponse, RequestHandler, RequestKind, SHORT_CODE_PARAM};
use std::collections::HashMap;
use tracing::{error, trace};

/// Runs one Lambda invocation through the request handler.
pub async fn handle_event(handler: &RequestHandler, event: Request) -> Result<Response<Body>, Error> {
    let request = link_request(&event);
    trace!(kind = ?request.kind, "handling lambda event");

    Ok(into_lambda_response(handler.handle(request).await))
}

fn link_request(event: &Request) -> LinkRequest {
    let path_parameters = event
        .path_parameters()
        .first(SHORT_CODE_PARAM)
        .map(|code| HashMap::from([(SHORT_CODE_PARAM.to_string(), code.to_string())]))
        .unwrap_or_default();

    let body = match event.body() {
        Body::Text(text) => Some(text.clone()),
        Body::Binary(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    };

    LinkRequest {
        kind: RequestKind::from_method(event.method().as_str()),
        body,
        path_parameters,
    }
}

/// Renders a [`LinkResponse`], falling back to a plain `500` when a header
/// cannot be carried, e.g. a stored URL with control characters.
fn into_lambda_response(response: LinkResponse) -> Response<Body> {
    match build_response(&response) {
        Ok(built) => built,
        Err(err) => {
            error!(error = %err, status = response.status, "response cannot be represented");
            internal_error_response()
        }
    }
}

fn build_response(response: &LinkResponse) -> Result<Response<Body>, lambda_http::http::Error> {
    let mut builder = Response::builder().status(response.status);
    for (name, value) in &response.headers {
        builder = builder.header(*name, value.as_str());
    }

    builder.body(Body::Text(response.body.clone()))
}

fn internal_error_response() -> Response<Body> {
    let mut response = Response::new(Body::Text(LinkResponse::internal_error().body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_http::http::Method;
    use serde_json::{json, Value};
    use shortly_generator::SeqGenerator;
    use shortly_shortener::{HandlerConfig, ShortenerService};
    use shortly_storage::InMemoryRepository;
    use std::sync::Arc;

    fn test_handler() -> RequestHandler {
        let service = ShortenerService::new(InMemoryRepository::new(), SeqGenerator::with_offset(0xab12cd));
        RequestHandler::new(Arc::new(service), HandlerConfig::default())
    }

    fn event(method: Method, body: Body, code: Option<&str>) -> Request {
        let mut request = Request::new(body);
        *request.method_mut() = method;
        match code {
            Some(code) => request.with_path_parameters(HashMap::from([(
                SHORT_CODE_PARAM.to_string(),
                code.to_string(),
            )])),
            None => request,
        }
    }

    fn body_json(response: &Response<Body>) -> Value {
        match response.body() {
            Body::Text(text) => serde_json::from_str(text).unwrap(),
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn event_maps_to_link_request() {
        let request = link_request(&event(
            Method::GET,
            Body::Empty,
            Some("ab12cd"),
        ));
        assert_eq!(request.kind, RequestKind::Resolve);
        assert_eq!(request.short_code(), Some("ab12cd"));
        assert!(request.body.is_none());

        let request = link_request(&event(
            Method::POST,
            Body::Binary(br#"{"longUrl":"https://a.example"}"#.to_vec()),
            None,
        ));
        assert_eq!(request.kind, RequestKind::Create);
        assert_eq!(request.body.as_deref(), Some(r#"{"longUrl":"https://a.example"}"#));
    }

    #[tokio::test]
    async fn create_then_redirect() {
        let handler = test_handler();

        let created = handle_event(
            &handler,
            event(
                Method::POST,
                Body::Text(r#"{"longUrl": "https://example.com/page"}"#.to_string()),
                None,
            ),
        )
        .await
        .unwrap();
        assert_eq!(created.status(), 200);
        assert_eq!(body_json(&created), json!({ "shortUrl": "https://short.ly/ab12cd" }));

        let redirect = handle_event(&handler, event(Method::GET, Body::Empty, Some("ab12cd")))
            .await
            .unwrap();
        assert_eq!(redirect.status(), 301);
        assert_eq!(redirect.headers()["location"], "https://example.com/page");
    }

    #[tokio::test]
    async fn missing_body_is_internal_error() {
        let handler = test_handler();

        let response = handle_event(&handler, event(Method::POST, Body::Empty, None))
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        assert_eq!(body_json(&response), json!({ "error": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn unrepresentable_location_is_internal_error() {
        let handler = test_handler();

        let created = handle_event(
            &handler,
            event(
                Method::POST,
                Body::Text(json!({ "longUrl": "https://a.example/\r\nSet-Cookie: x=1" }).to_string()),
                None,
            ),
        )
        .await
        .unwrap();
        assert_eq!(created.status(), 200);

        let response = handle_event(&handler, event(Method::GET, Body::Empty, Some("ab12cd")))
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert!(response.headers().get("location").is_none());
        assert!(response.headers().get("set-cookie").is_none());
        assert_eq!(body_json(&response), json!({ "error": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn put_is_unsupported() {
        let handler = test_handler();

        let response = handle_event(&handler, event(Method::PUT, Body::Empty, Some("ab12cd")))
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(body_json(&response), json!({ "error": "Unsupported request method" }));
    }
}
