//! Request handler module
//!
//! Route dispatch plus the two kinds of content the server produces:
//! bundled static assets and the live player snapshot.

pub mod router;
pub mod snapshot;
pub mod static_files;

// Re-export main entry point
pub use router::{dispatch, handle_request};
