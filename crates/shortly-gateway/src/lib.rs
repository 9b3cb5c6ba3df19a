//! HTTP transport for the short link service.
//!
//! `POST /` creates a link, `GET /{shortCode}` redirects, any other method
//! is answered by the request handler as unsupported.

pub mod app;
pub mod handlers;
pub mod response;
pub mod state;

pub use app::App;
pub use state::AppState;
