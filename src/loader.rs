use axum::http::StatusCode;
use serde::Serialize;

/// Query string accepted by the document route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentQuery {
    /// The display name of the document. Required; an empty value counts as missing.
    pub name: Option<String>,
}

impl DocumentQuery {
    /// Picks the parameters out of decoded query pairs. When a key repeats, the
    /// first occurrence wins.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let name = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "name").then_some(value));

        Self { name }
    }
}

/// Everything the loader needs from a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// The `id` path segment the router matched.
    pub doc_id: String,
    pub query: DocumentQuery,
}

/// The data handed to the document view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    pub doc_id: String,
    pub name: String,
}

/// Send the client somewhere else instead of rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub status: StatusCode,
    pub location: &'static str,
}

impl Redirect {
    /// A `302 Found` back to the site root.
    pub fn to_root() -> Self {
        Self {
            status: StatusCode::FOUND,
            location: "/",
        }
    }
}

/// What the document page should do: render a payload or redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    Redirect(Redirect),
    Payload(DocumentPayload),
}

/// Prepares the data for the document page, or redirects to the root when no
/// `name` was given.
pub fn load(ctx: &RequestContext) -> LoadResult {
    match ctx.query.name.as_deref() {
        Some(name) if !name.is_empty() => LoadResult::Payload(DocumentPayload {
            doc_id: ctx.doc_id.clone(),
            name: name.to_string(),
        }),
        _ => LoadResult::Redirect(Redirect::to_root()),
    }
}
