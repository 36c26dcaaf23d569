use serde::{Deserialize, Serialize};

/// One logical PDF document in the library view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibDocument {
    pub id: String,
    pub bank: String,
    pub filename: String,
    /// Analysed document title, falling back to the filename.
    pub title: String,
    pub path: String,
    /// Page number of the index record the entry was collapsed from.
    pub page: Option<u32>,
    /// ISO date string as stored in the index, passed through as-is.
    pub effective_date: Option<String>,
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LibraryResponse {
    pub total: usize,
    pub documents: Vec<LibDocument>,
}
