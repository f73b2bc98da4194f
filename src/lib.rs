//! Embedded web UI server for a live player status page
//!
//! A host application starts the server once during initialization and hands
//! it a [`LiveStateAccessor`]. The server then answers on a loopback port:
//! the bundled HTML/CSS/JS page, a few auxiliary assets, and `/player`, a JSON
//! snapshot of the host's current player.
//!
//! ```no_run
//! use std::sync::Arc;
//! use player_status_server::config::Config;
//! use player_status_server::host::{BlockPos, LiveStateAccessor, PlayerView};
//!
//! struct Host;
//!
//! impl LiveStateAccessor for Host {
//!     fn player(&self) -> Option<Box<dyn PlayerView + '_>> {
//!         None
//!     }
//!
//!     fn biome_at(&self, _pos: BlockPos) -> Option<String> {
//!         None
//!     }
//! }
//!
//! let handle = player_status_server::launch(&Config::default(), Arc::new(Host));
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod handler;
pub mod host;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;

pub use error::{AssetError, RouteTableError, ServerError};
pub use host::{LiveStateAccessor, PlayerView};
pub use server::{launch, ServerHandle, WebUiServer};
