use super::types::LibDocument;
use crate::meili::client::SearchClient;
use crate::meili::types::RawDocument;
use std::collections::HashSet;

/// Records fetched per catalog page.
const PAGE_SIZE: usize = 1000;
/// Hard cap on fetched records, traversal stops here regardless of total.
const MAX_RECORDS: usize = 5000;

/// Catalog fields requested from the engine; content stays behind.
const CATALOG_FIELDS: &[&str] = &[
    "id",
    "bank",
    "filename",
    "path",
    "page",
    "category",
    "document_title",
    "effective_date",
];

/// Fetch the full document catalog and collapse the page-level records to
/// one entry per document path.
pub async fn fetch_library(client: &SearchClient) -> anyhow::Result<Vec<LibDocument>> {
    let mut records: Vec<RawDocument> = Vec::new();
    let mut offset = 0;

    loop {
        let page = client
            .fetch_documents(offset, PAGE_SIZE, CATALOG_FIELDS)
            .await?;
        let fetched = page.results.len();
        records.extend(page.results);

        offset += fetched;
        if offset >= page.total || fetched == 0 || offset >= MAX_RECORDS {
            break;
        }
    }

    Ok(dedupe_by_path(records))
}

/// Keep the first record seen for each path; every PDF page is indexed as a
/// separate record but collapses to one logical document.
pub fn dedupe_by_path(records: Vec<RawDocument>) -> Vec<LibDocument> {
    let mut seen: HashSet<String> = HashSet::new();

    records
        .into_iter()
        .filter(|record| seen.insert(record.path.clone()))
        .map(|record| LibDocument {
            id: record.id,
            bank: record.bank,
            title: record
                .document_title
                .unwrap_or_else(|| record.filename.clone()),
            filename: record.filename,
            path: record.path,
            page: record.page,
            effective_date: record.effective_date,
            category: record.category.unwrap_or_else(|| "Uncategorized".to_string()),
        })
        .collect()
}
