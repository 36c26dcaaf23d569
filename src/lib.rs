//! Bank Fee Document Search Library
//!
//! This library crate defines the modules behind the bank-fee document
//! browser. Full-text search itself is delegated to a hosted MeiliSearch
//! instance; this service builds queries, shapes results and serves the
//! stored PDF files to the embedded web UI (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of five small subsystems:
//!
//! - **`query`**: Parses gmail-style operators (`bank:`, `category:`) out of
//!   the raw search input and turns them into MeiliSearch filter clauses.
//! - **`meili`**: The HTTP client adapter for the hosted MeiliSearch engine.
//!   Constructed once at startup and injected into the handlers.
//! - **`search`**: Turns raw engine hits into highlighted, snippeted records
//!   grouped per bank, and exposes the `/api/search` endpoint.
//! - **`library`**: Fetches the full document catalog and collapses the
//!   page-level index records into one entry per PDF (`/api/documents`).
//! - **`files`**: Serves stored documents by relative path with a
//!   path-traversal check (`/api/file/*path`).

pub mod config;
pub mod files;
pub mod library;
pub mod meili;
pub mod query;
pub mod search;
