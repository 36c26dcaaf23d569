use axum::response::Html;
use axum::{routing::get, Extension, Router};
use bankfees::config::AppConfig;
use bankfees::files::handlers::handle_get_file;
use bankfees::library::handlers::handle_list_documents;
use bankfees::meili::client::SearchClient;
use bankfees::search::handlers::handle_search;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Arc::new(AppConfig::from_env()?);
    let client = Arc::new(SearchClient::new(&config));

    let app = Router::new()
        .route("/", get(ui))
        .route("/api/search", get(handle_search))
        .route("/api/documents", get(handle_list_documents))
        .route("/api/file/*path", get(handle_get_file))
        .layer(Extension(client))
        .layer(Extension(config.clone()));

    tracing::info!("Searching index '{}' on {}", config.meili_index, config.meili_host);
    tracing::info!("Serving documents from {}", config.docs_root.display());
    tracing::info!("Listening on {}", config.bind);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}
