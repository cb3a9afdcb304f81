use askama::Template;

use crate::loader::DocumentPayload;

#[derive(Debug, Template)]
#[template(path = "document.html")]
pub struct DocumentTemplate {
    pub doc_id: String,
    pub name: String,
}

impl From<DocumentPayload> for DocumentTemplate {
    fn from(DocumentPayload { doc_id, name }: DocumentPayload) -> Self {
        Self { doc_id, name }
    }
}

/// The site root, where documents without a name are sent.
#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;
