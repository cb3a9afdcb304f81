use askama::Template;
use axum::response::Html;

use crate::{error::AppError, page_template::IndexTemplate};

pub async fn index() -> Result<Html<String>, AppError> {
    Ok(Html(IndexTemplate.render()?))
}
