//! Static asset resolver
//!
//! Maps a logical resource path (e.g. `web/index.html`) to its raw bytes.
//! MIME types are not decided here; they belong to the route that points at
//! the resource.

pub mod directory;
pub mod embedded;

pub use directory::DirectoryAssets;
pub use embedded::EmbeddedAssets;

use crate::error::AssetError;
use hyper::body::Bytes;

/// A read-only set of resources keyed by logical path
pub trait ResourceSet: Send + Sync {
    /// Full byte content of the resource, never re-encoded
    fn load(&self, path: &str) -> Result<Bytes, AssetError>;
}
