// Application state module
// Everything a request handler reads: routes, resources, host state, logging switches

use std::sync::Arc;

use super::types::LoggingConfig;
use crate::assets::{EmbeddedAssets, ResourceSet};
use crate::host::LiveStateAccessor;
use crate::logger::{self, AccessLogFormat};
use crate::routing::RouteTable;

/// Application state shared by every connection
///
/// Built once before the server starts and never mutated afterwards.
pub struct AppState {
    pub routes: RouteTable,
    pub assets: Arc<dyn ResourceSet>,
    pub live_state: Arc<dyn LiveStateAccessor>,
    pub access_log: bool,
    pub access_log_format: AccessLogFormat,
}

impl AppState {
    /// Default routes and the bundled web UI, reading from `live_state`
    pub fn new(live_state: Arc<dyn LiveStateAccessor>) -> Self {
        Self {
            routes: RouteTable::default(),
            assets: Arc::new(EmbeddedAssets::bundled()),
            live_state,
            access_log: true,
            access_log_format: AccessLogFormat::default(),
        }
    }

    #[must_use]
    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    #[must_use]
    pub fn with_assets(mut self, assets: Arc<dyn ResourceSet>) -> Self {
        self.assets = assets;
        self
    }

    /// Apply access log settings; an unknown format falls back to `common`
    #[must_use]
    pub fn with_logging(mut self, config: &LoggingConfig) -> Self {
        self.access_log = config.access_log;
        self.access_log_format = match config.access_log_format.parse() {
            Ok(format) => format,
            Err(e) => {
                logger::log_warning(&format!("{e}, using common"));
                AccessLogFormat::Common
            }
        };
        self
    }
}
