//! Greeting HTTP Routes
//!
//! `GET /` and `GET /mirror/{name}`; useful for checking a deployment answers.

use axum::{extract::Path, routing::get, Router};
use serde_json::json;

use crate::envelope::{Envelope, EnvelopeResult};

/// Create greeting routes
pub fn greeting_routes() -> Router {
    Router::new()
        .route("/", get(hello_handler))
        .route("/mirror/{name}", get(mirror_handler))
}

async fn hello_handler() -> EnvelopeResult<Envelope> {
    Envelope::ok(json!({ "content": "hello world!" }))
}

async fn mirror_handler(Path(name): Path<String>) -> EnvelopeResult<Envelope> {
    Envelope::ok(json!({ "name": name }))
}
