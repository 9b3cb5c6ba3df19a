//! Short link service: code generation, persistence and the request
//! handler that turns logical create/resolve requests into responses.
//!
//! Transports (HTTP server, Lambda) build a [`LinkRequest`], call
//! [`RequestHandler::handle`] and render the returned [`LinkResponse`].

pub mod error;
pub mod handler;
pub mod request;
pub mod response;
pub mod service;

pub use error::HandlerError;
pub use handler::{HandlerConfig, RequestHandler, DEFAULT_BASE_URL};
pub use request::{LinkRequest, RequestKind, SHORT_CODE_PARAM};
pub use response::LinkResponse;
pub use service::ShortenerService;
