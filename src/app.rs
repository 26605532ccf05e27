use axum::{Router, routing::get};

use crate::extension::Registration;

pub struct App {
    registration: Registration,
}

impl App {
    pub fn new(registration: Registration) -> Self {
        Self { registration }
    }

    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(|| async { "Hello, World!" }))
            .merge(self.registration.routes)
    }
}
