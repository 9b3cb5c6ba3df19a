use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use shortly_shortener::LinkResponse;
use tracing::error;

/// Renders a [`LinkResponse`] as an axum response.
#[derive(Debug)]
pub struct HttpResponse(pub LinkResponse);

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let LinkResponse {
            status,
            headers,
            body,
        } = self.0;

        // header values may carry non-ASCII URL bytes but never control characters
        let headers: Result<Vec<_>, _> = headers
            .iter()
            .map(|(name, value)| {
                Ok::<_, axum::http::Error>((
                    HeaderName::from_bytes(name.as_bytes())?,
                    HeaderValue::from_bytes(value.as_bytes())?,
                ))
            })
            .collect();

        let headers = match headers {
            Ok(headers) => headers,
            Err(err) => {
                error!(error = %err, status, "response cannot be represented");
                return HttpResponse(LinkResponse::internal_error()).into_response();
            }
        };

        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, body).into_response();
        for (name, value) in headers {
            response.headers_mut().insert(name, value);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::{CONTENT_TYPE, LOCATION};

    #[test]
    fn redirect_carries_location() {
        let response = HttpResponse(LinkResponse::redirect("https://example.com/page")).into_response();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()[LOCATION], "https://example.com/page");
    }

    #[test]
    fn json_content_type_replaces_default() {
        let response = HttpResponse(LinkResponse::error(404, "Short URL not found")).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn control_characters_in_location_become_internal_error() {
        let response = HttpResponse(LinkResponse::redirect("https://a.example/\r\nx")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(LOCATION).is_none());
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    }
}
