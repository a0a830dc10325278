//! Show HTTP Routes
//!
//! CRUD endpoints for the `shows` collection. Bodies are taken as raw bytes so
//! a malformed payload still gets an envelope instead of the framework's
//! plain-text rejection.

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::envelope::Envelope;
use crate::shows::{ShowHandler, ShowResult};

/// Create show routes
pub fn show_routes(handler: ShowHandler) -> Router {
    Router::new()
        .route("/shows", get(list_shows_handler).post(create_show_handler))
        .route(
            "/shows/{id}",
            get(get_show_handler)
                .put(update_show_handler)
                .delete(delete_show_handler),
        )
        .with_state(handler)
}

async fn list_shows_handler(State(handler): State<ShowHandler>) -> ShowResult<Envelope> {
    handler.list()
}

async fn get_show_handler(
    State(handler): State<ShowHandler>,
    Path(id): Path<String>,
) -> ShowResult<Envelope> {
    handler.get(&id)
}

async fn create_show_handler(
    State(handler): State<ShowHandler>,
    body: Bytes,
) -> ShowResult<Envelope> {
    handler.create(&body)
}

async fn update_show_handler(
    State(handler): State<ShowHandler>,
    Path(id): Path<String>,
    body: Bytes,
) -> ShowResult<Envelope> {
    handler.update(&id, &body)
}

async fn delete_show_handler(
    State(handler): State<ShowHandler>,
    Path(id): Path<String>,
) -> ShowResult<Envelope> {
    handler.delete(&id)
}
