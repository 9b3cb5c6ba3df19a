use serde_json::Value;
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// Path parameter that carries the short code of a resolve request.
pub const SHORT_CODE_PARAM: &str = "shortCode";

/// What a request asks the service to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    Create,
    Resolve,
    /// Anything else, keeping the original method for logging.
    Unsupported(String),
}

impl RequestKind {
    /// Maps an HTTP method onto a request kind.
    ///
    /// Methods are matched case-sensitively, as HTTP defines them.
    pub fn from_method(method: &str) -> Self {
        match method {
            "POST" => RequestKind::Create,
            "GET" => RequestKind::Resolve,
            other => RequestKind::Unsupported(other.to_string()),
        }
    }
}

/// A transport-agnostic request.
#[derive(Debug, Clone, TypedBuilder)]
pub struct LinkRequest {
    pub kind: RequestKind,
    /// Raw request body, if the transport received one.
    #[builder(default, setter(strip_option, into))]
    pub body: Option<String>,
    #[builder(default)]
    pub path_parameters: HashMap<String, String>,
}

impl LinkRequest {
    /// A create request carrying `body`.
    pub fn create(body: impl Into<String>) -> Self {
        Self::builder().kind(RequestKind::Create).body(body).build()
    }

    /// A resolve request for `short_code`.
    pub fn resolve(short_code: impl Into<String>) -> Self {
        Self::builder()
            .kind(RequestKind::Resolve)
            .path_parameters(HashMap::from([(
                SHORT_CODE_PARAM.to_string(),
                short_code.into(),
            )]))
            .build()
    }

    /// The `shortCode` path parameter, if present.
    pub fn short_code(&self) -> Option<&str> {
        self.path_parameters
            .get(SHORT_CODE_PARAM)
            .map(String::as_str)
    }
}

/// Field of a create body that carries the URL to shorten.
pub const LONG_URL_FIELD: &str = "longUrl";

/// Extracts the URL to shorten from a create body.
///
/// Fails only when the body is not JSON at all. Well-formed JSON without a
/// non-empty string `longUrl` (another type, a scalar or an array body)
/// yields `None`.
pub(crate) fn parse_long_url(body: &str) -> serde_json::Result<Option<String>> {
    let payload: Value = serde_json::from_str(body)?;

    Ok(payload
        .get(LONG_URL_FIELD)
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(str::to_string))
}
