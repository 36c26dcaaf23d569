use serde::{Deserialize, Serialize};

/// One shaped search result, ready for display.
///
/// `page` is the 1-based page number within the PDF at `path`, matching how
/// the indexer numbers pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub bank: String,
    pub filename: String,
    pub path: String,
    pub page: u32,
    pub content: String,
    /// Short excerpt centred on the first highlighted term.
    pub highlight: String,
    /// Up to three windows of page text around query matches.
    pub context_snippets: Vec<String>,
    /// First dollar amount found on the page, without the currency symbol.
    pub fee_amount: Option<String>,
    pub category: Option<String>,
}

/// Hits of one bank, in engine-returned order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankGroup {
    pub bank: String,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub filters: Vec<String>,
    pub total: usize,
    pub groups: Vec<BankGroup>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
