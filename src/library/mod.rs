//! Document Library Module
//!
//! Backs the PDF library browsing view. The index stores one record per PDF
//! page, so the catalog is fetched page-wise from the engine and collapsed
//! to one logical entry per document path before display.
//!
//! ## Submodules
//! - **`lister`**: Paged catalog fetch and path deduplication.
//! - **`handlers`**: The `/api/documents` HTTP handler.
//! - **`types`**: Display DTOs.

pub mod handlers;
pub mod lister;
pub mod types;
