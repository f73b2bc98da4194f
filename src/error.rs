//! Error types shared across the server
//!
//! Resolver failures are split into "absent" and "broken" so the router can
//! pick 404 or 500 by matching instead of inspecting error messages.

use std::io;
use std::net::SocketAddr;

/// Failure to produce the bytes of a bundled resource
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The logical path is not part of the resource set
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The resource exists but could not be read
    #[error("failed to read resource '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl AssetError {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Route table construction errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route declared twice: {0}")]
    DuplicateUri(String),

    #[error("route path must start with '/': {0}")]
    InvalidUri(String),
}

/// Server lifecycle errors
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listening socket could not be created or bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The serving runtime or thread could not be created
    #[error("failed to start server runtime: {0}")]
    Runtime(#[from] io::Error),

    /// The serving thread ended by panicking
    #[error("server thread panicked")]
    ThreadPanicked,
}
