//! Document File Serving
//!
//! Serves the stored PDF files referenced by search results and library
//! entries. Documents are addressed by their index `path` relative to the
//! configured document root; anything trying to escape that root is
//! rejected before touching the filesystem.
//!
//! Error taxonomy: 400 for an invalid path, 404 when the document does not
//! exist, 500 for any other read failure.

pub mod handlers;
