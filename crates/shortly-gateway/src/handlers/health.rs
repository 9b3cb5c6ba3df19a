use crate::response::HttpResponse;
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use shortly_shortener::{HandlerError, LinkResponse};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// `GET /health`; other methods get the same 400 as every other route.
pub async fn health_handler(method: Method) -> Response {
    if method != Method::GET {
        let err = HandlerError::UnsupportedMethod(method.to_string());
        return HttpResponse(LinkResponse::error(err.status(), err.public_message())).into_response();
    }

    Json(HealthResponse { status: "ok" }).into_response()
}
