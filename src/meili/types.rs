use serde::{Deserialize, Serialize};

/// Body of a `POST /indexes/<index>/search` request.
///
/// Field names follow the MeiliSearch REST API, hence the camelCase rename.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub q: String,
    pub limit: usize,
    pub attributes_to_highlight: Vec<String>,
    pub highlight_pre_tag: String,
    pub highlight_post_tag: String,
    pub attributes_to_crop: Vec<String>,
    pub crop_length: usize,
    pub crop_marker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Envelope of a search response. Only the hits are consumed.
#[derive(Debug, Deserialize)]
pub struct SearchResults {
    pub hits: Vec<RawHit>,
}

/// One matching index record. The index stores one record per PDF page, so
/// `page` is the 1-based page number within the document at `path`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHit {
    pub id: String,
    pub bank: String,
    pub filename: String,
    pub path: String,
    pub page: u32,
    #[serde(default)]
    pub content: String,
    pub category: Option<String>,
    pub document_title: Option<String>,
    pub effective_date: Option<String>,
    /// Highlighted copy of the requested attributes, present when the
    /// search asked for highlighting.
    #[serde(rename = "_formatted")]
    pub formatted: Option<FormattedFields>,
}

/// The `_formatted` sub-object of a hit.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattedFields {
    #[serde(default)]
    pub content: String,
}

/// One page of a `GET /indexes/<index>/documents` listing.
#[derive(Debug, Deserialize)]
pub struct DocumentsPage {
    pub results: Vec<RawDocument>,
    pub offset: usize,
    pub limit: usize,
    pub total: usize,
}

/// Catalog fields of an index record, without content or highlighting.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    pub id: String,
    pub bank: String,
    pub filename: String,
    pub path: String,
    pub page: Option<u32>,
    pub category: Option<String>,
    pub document_title: Option<String>,
    pub effective_date: Option<String>,
}
