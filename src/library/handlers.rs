use super::lister::fetch_library;
use super::types::LibraryResponse;
use crate::meili::client::SearchClient;
use crate::search::types::ErrorResponse;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_list_documents(
    Extension(client): Extension<Arc<SearchClient>>,
) -> Result<Json<LibraryResponse>, (StatusCode, Json<ErrorResponse>)> {
    match fetch_library(&client).await {
        Ok(documents) => Ok(Json(LibraryResponse {
            total: documents.len(),
            documents,
        })),
        Err(err) => {
            tracing::error!("MeiliSearch error: {:?}", err);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Failed to fetch documents".to_string(),
                }),
            ))
        }
    }
}
