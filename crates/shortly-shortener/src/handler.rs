use crate::error::HandlerError;
use crate::request::{parse_long_url, LinkRequest, RequestKind};
use crate::response::LinkResponse;
use serde_json::json;
use shortly_core::{ShortCode, Shortener};
use std::sync::Arc;
use tracing::{debug, error, trace, warn};
use typed_builder::TypedBuilder;

/// Prefix used to build short URLs when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://short.ly/";

#[derive(Debug, Clone, TypedBuilder)]
pub struct HandlerConfig {
    /// Public prefix in front of every short code, e.g. `https://short.ly/`.
    #[builder(default = DEFAULT_BASE_URL.to_string(), setter(into))]
    pub base_url: String,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Single entry point for create and resolve requests.
///
/// Every outcome, including backend failures, comes back as a
/// [`LinkResponse`]; nothing escapes `handle` as an error.
#[derive(Clone)]
pub struct RequestHandler {
    shortener: Arc<dyn Shortener>,
    config: HandlerConfig,
}

impl RequestHandler {
    pub fn new(shortener: Arc<dyn Shortener>, config: HandlerConfig) -> Self {
        Self { shortener, config }
    }

    pub async fn handle(&self, request: LinkRequest) -> LinkResponse {
        let result = match &request.kind {
            RequestKind::Create => self.create(request.body.as_deref()).await,
            RequestKind::Resolve => self.resolve(request.short_code()).await,
            RequestKind::Unsupported(method) => {
                Err(HandlerError::UnsupportedMethod(method.clone()))
            }
        };

        result.unwrap_or_else(|err| Self::error_response(&err))
    }

    async fn create(&self, body: Option<&str>) -> Result<LinkResponse, HandlerError> {
        let body = body.ok_or_else(|| HandlerError::MalformedBody("body is missing".into()))?;
        let long_url = parse_long_url(body)
            .map_err(|e| HandlerError::MalformedBody(e.to_string()))?
            .ok_or(HandlerError::MissingLongUrl)?;

        let record = self.shortener.shorten(long_url).await?;
        let short_url = record.short_code.to_url(&self.config.base_url);

        debug!(code = %record.short_code, short_url = %short_url, "created short link");
        Ok(LinkResponse::json(200, json!({ "shortUrl": short_url })))
    }

    async fn resolve(&self, code: Option<&str>) -> Result<LinkResponse, HandlerError> {
        let raw = code.ok_or_else(|| HandlerError::NotFound("<missing>".into()))?;

        // a malformed code can never have been stored
        let code = ShortCode::new(raw).map_err(|_| HandlerError::NotFound(raw.to_string()))?;

        let record = self
            .shortener
            .resolve(&code)
            .await?
            .ok_or_else(|| HandlerError::NotFound(code.to_string()))?;

        trace!(code = %code, location = %record.long_url, "redirecting");
        Ok(LinkResponse::redirect(record.long_url))
    }

    fn error_response(err: &HandlerError) -> LinkResponse {
        match err {
            HandlerError::Backend(_) | HandlerError::MalformedBody(_) => {
                error!(error = %err, "error processing request");
            }
            HandlerError::UnsupportedMethod(_) => {
                warn!(error = %err, "rejected request");
            }
            HandlerError::MissingLongUrl | HandlerError::NotFound(_) => {
                debug!(error = %err, "rejected request");
            }
        }

        LinkResponse::error(err.status(), err.public_message())
    }
}
