use axum::routing::any;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, link_handler, root_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", any(health_handler))
            .route("/", any(root_handler))
            .route("/{short_code}", any(link_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
