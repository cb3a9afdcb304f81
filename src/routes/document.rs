use askama::Template;
use axum::{
    extract::{Path, Query},
    http::header::LOCATION,
    response::{Html, IntoResponse, Response},
};
use tracing::info;

use crate::{
    error::AppError,
    loader::{load, DocumentQuery, LoadResult, RequestContext},
    page_template::DocumentTemplate,
};

/// Shows the document `id`, titled by the `name` query parameter.
pub async fn document(
    Path(doc_id): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let query = DocumentQuery::from_pairs(pairs);

    match load(&RequestContext { doc_id, query }) {
        LoadResult::Redirect(redirect) => {
            Ok((redirect.status, [(LOCATION, redirect.location)]).into_response())
        }
        LoadResult::Payload(payload) => {
            info!("Rendering document {} ({})", payload.doc_id, payload.name);

            let page = DocumentTemplate::from(payload).render()?;
            Ok(Html(page).into_response())
        }
    }
}
