//! MeiliSearch Client Adapter
//!
//! Thin HTTP adapter for the hosted MeiliSearch instance the document index
//! lives in. Indexing, ranking and filtering all happen engine-side; this
//! module only speaks the REST API.
//!
//! The client is constructed once in `main` from [`AppConfig`] and injected
//! into the handlers through an axum `Extension` layer, so there is no
//! module-level shared state.
//!
//! ## Submodules
//! - **`client`**: The [`SearchClient`] itself (search + document listing).
//! - **`types`**: Wire types for the MeiliSearch request/response bodies.
//!
//! [`AppConfig`]: crate::config::AppConfig
//! [`SearchClient`]: client::SearchClient

pub mod client;
pub mod types;
