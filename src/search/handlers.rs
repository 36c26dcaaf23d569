use super::shaper::{group_by_bank, shape_hit};
use super::types::{ErrorResponse, SearchResponse};
use crate::meili::client::SearchClient;
use crate::query::parser::parse_search_input;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(client): Extension<Arc<SearchClient>>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<ErrorResponse>)> {
    let parsed = parse_search_input(&params.q);

    if parsed.query.is_empty() && parsed.filters.is_empty() {
        return Ok(Json(SearchResponse {
            query: parsed.query,
            filters: parsed.filters,
            total: 0,
            groups: vec![],
        }));
    }

    let raw_hits = match client.search(&parsed.query, &parsed.filters).await {
        Ok(hits) => hits,
        Err(err) => {
            tracing::error!("MeiliSearch error: {:?}", err);
            return Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Failed to search documents".to_string(),
                }),
            ));
        }
    };

    let hits: Vec<_> = raw_hits
        .into_iter()
        .map(|hit| shape_hit(hit, &parsed.query))
        .collect();
    let total = hits.len();
    let groups = group_by_bank(hits);

    Ok(Json(SearchResponse {
        query: parsed.query,
        filters: parsed.filters,
        total,
        groups,
    }))
}
