use serde_json::{json, Value};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const LOCATION: &str = "Location";

const REDIRECT_BODY: &str = "Redirecting...";
const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// A transport-agnostic response: status, headers and a text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl LinkResponse {
    /// A JSON response.
    pub fn json(status: u16, value: Value) -> Self {
        Self {
            status,
            headers: vec![(CONTENT_TYPE, "application/json".to_string())],
            body: value.to_string(),
        }
    }

    /// A JSON error response of the form `{"error": message}`.
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, json!({ "error": message }))
    }

    /// The generic `500` answer that hides the underlying cause.
    pub fn internal_error() -> Self {
        Self::error(500, INTERNAL_ERROR_MESSAGE)
    }

    /// `301 Moved Permanently` to `location`.
    pub fn redirect(location: impl Into<String>) -> Self {
        Self {
            status: 301,
            headers: vec![
                (LOCATION, location.into()),
                (CONTENT_TYPE, "text/plain".to_string()),
            ],
            body: REDIRECT_BODY.to_string(),
        }
    }

    /// Looks up a header value, ignoring ASCII case in the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Parses the body as JSON.
    pub fn json_body(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_shape() {
        let response = LinkResponse::error(404, "Short URL not found");
        assert_eq!(response.status, 404);
        assert_eq!(response.body, r#"{"error":"Short URL not found"}"#);
        assert_eq!(response.header("content-type"), Some("application/json"));
    }

    #[test]
    fn internal_error_is_generic() {
        let response = LinkResponse::internal_error();
        assert_eq!(response.status, 500);
        assert_eq!(response.body, r#"{"error":"Internal Server Error"}"#);
    }

    #[test]
    fn redirect_sets_location() {
        let response = LinkResponse::redirect("https://example.com/page");
        assert_eq!(response.status, 301);
        assert_eq!(response.header("Location"), Some("https://example.com/page"));
        assert_eq!(response.body, "Redirecting...");
        assert!(response.json_body().is_none());
    }
}
