use super::types::{DocumentsPage, RawHit, SearchQuery, SearchResults};
use crate::config::AppConfig;
use anyhow::Context;

/// Maximum number of hits requested per search.
const SEARCH_LIMIT: usize = 100;
/// Characters of context the engine keeps around matches when cropping.
const CROP_LENGTH: usize = 150;
/// Marker pair wrapped around highlighted terms in `_formatted` content.
const HIGHLIGHT_TAG: &str = "**";

/// HTTP client for the hosted MeiliSearch index.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    host: String,
    api_key: Option<String>,
    index: String,
}

impl SearchClient {
    pub fn new(config: &AppConfig) -> Self {
        SearchClient {
            http: reqwest::Client::new(),
            host: config.meili_host.clone(),
            api_key: config.meili_api_key.clone(),
            index: config.meili_index.clone(),
        }
    }

    /// Run a full-text search with content highlighting and cropping
    /// enabled. `filters` are pre-built clauses joined with AND; ranking
    /// and filtering are entirely engine-side.
    pub async fn search(&self, query: &str, filters: &[String]) -> anyhow::Result<Vec<RawHit>> {
        let body = SearchQuery {
            q: query.to_string(),
            limit: SEARCH_LIMIT,
            attributes_to_highlight: vec!["content".to_string()],
            highlight_pre_tag: HIGHLIGHT_TAG.to_string(),
            highlight_post_tag: HIGHLIGHT_TAG.to_string(),
            attributes_to_crop: vec!["content".to_string()],
            crop_length: CROP_LENGTH,
            crop_marker: "...".to_string(),
            filter: if filters.is_empty() {
                None
            } else {
                Some(filters.join(" AND "))
            },
        };

        let url = format!("{}/indexes/{}/search", self.host, self.index);
        let results: SearchResults = self
            .authorize(self.http.post(url))
            .json(&body)
            .send()
            .await
            .context("search request failed")?
            .error_for_status()
            .context("search request rejected")?
            .json()
            .await
            .context("invalid search response")?;

        Ok(results.hits)
    }

    /// Fetch one page of the raw document listing, restricted to the
    /// catalog fields named in `fields`.
    pub async fn fetch_documents(
        &self,
        offset: usize,
        limit: usize,
        fields: &[&str],
    ) -> anyhow::Result<DocumentsPage> {
        let url = format!("{}/indexes/{}/documents", self.host, self.index);
        let page: DocumentsPage = self
            .authorize(self.http.get(url))
            .query(&[
                ("offset", offset.to_string()),
                ("limit", limit.to_string()),
                ("fields", fields.join(",")),
            ])
            .send()
            .await
            .context("document listing request failed")?
            .error_for_status()
            .context("document listing rejected")?
            .json()
            .await
            .context("invalid document listing response")?;

        Ok(page)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}
