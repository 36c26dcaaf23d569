//! Startup configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind: SocketAddr,
    /// Base URL of the hosted MeiliSearch instance.
    pub meili_host: String,
    /// Optional API key sent as a bearer token.
    pub meili_api_key: Option<String>,
    /// Index the PDF pages are stored in.
    pub meili_index: String,
    /// Directory the original PDF files live under.
    pub docs_root: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind: SocketAddr = std::env::var("BIND")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()?;

        let meili_host = std::env::var("MEILI_HOST")
            .unwrap_or_else(|_| "http://localhost:7700".to_string())
            .trim_end_matches('/')
            .to_string();

        let meili_api_key = std::env::var("MEILI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let meili_index =
            std::env::var("MEILI_INDEX").unwrap_or_else(|_| "bankfees".to_string());

        let docs_root =
            PathBuf::from(std::env::var("DOCS_ROOT").unwrap_or_else(|_| "./data".to_string()));

        Ok(AppConfig {
            bind,
            meili_host,
            meili_api_key,
            meili_index,
            docs_root,
        })
    }
}
