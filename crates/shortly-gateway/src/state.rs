use shortly_shortener::RequestHandler;

#[derive(Clone)]
pub struct AppState {
    handler: RequestHandler,
}

impl AppState {
    pub fn new(handler: RequestHandler) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &RequestHandler {
        &self.handler
    }
}
