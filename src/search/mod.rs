//! Search Service Module
//!
//! Bridges the HTTP API with the hosted search engine: parses the raw user
//! input, runs the engine query and shapes the raw hits into the records
//! the UI renders.
//!
//! ## Responsibilities
//! - **Shaping**: Deriving a highlighted excerpt, context snippets and a
//!   detected fee amount from each hit's page content.
//! - **Grouping**: Partitioning hits per bank, groups sorted alphabetically.
//! - **API**: Exposing `/api/search` via the Axum web server.
//!
//! ## Submodules
//! - **`shaper`**: Excerpt, snippet and fee-amount extraction plus grouping.
//! - **`handlers`**: HTTP request handlers.
//! - **`types`**: Response DTOs.

pub mod handlers;
pub mod shaper;
pub mod types;
