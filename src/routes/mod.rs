use axum::{routing::get, Router};

mod document;
mod index;
use document::document;
use index::index;

pub fn construct_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/document/:id", get(document))
}
