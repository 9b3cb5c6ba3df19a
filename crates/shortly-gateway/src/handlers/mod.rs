mod health;
mod link;

pub use health::{health_handler, HealthResponse};
pub use link::{link_handler, root_handler};
