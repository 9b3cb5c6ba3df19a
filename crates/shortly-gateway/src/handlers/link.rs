use crate::response::HttpResponse;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::Method;
use shortly_shortener::{LinkRequest, RequestKind, SHORT_CODE_PARAM};
use std::collections::HashMap;

/// `/{short_code}` for every method.
pub async fn link_handler(
    State(state): State<AppState>,
    method: Method,
    Path(short_code): Path<String>,
    body: Bytes,
) -> HttpResponse {
    let request = link_request(&method, Some(short_code), body);
    HttpResponse(state.handler().handle(request).await)
}

/// `/` for every method; a create request carries no path parameter.
pub async fn root_handler(State(state): State<AppState>, method: Method, body: Bytes) -> HttpResponse {
    let request = link_request(&method, None, body);
    HttpResponse(state.handler().handle(request).await)
}

fn link_request(method: &Method, short_code: Option<String>, body: Bytes) -> LinkRequest {
    let path_parameters = short_code
        .map(|code| HashMap::from([(SHORT_CODE_PARAM.to_string(), code)]))
        .unwrap_or_default();

    // an empty or non UTF-8 body is passed on as absent
    let body = if body.is_empty() {
        None
    } else {
        String::from_utf8(body.to_vec()).ok()
    };

    LinkRequest {
        kind: RequestKind::from_method(method.as_str()),
        body,
        path_parameters,
    }
}
