//! Static asset serving module
//!
//! Resolves a route's resource and answers with its bytes untouched.

use crate::assets::ResourceSet;
use crate::error::AssetError;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Serve one declared asset with the route's MIME type
pub fn serve_asset(
    assets: &dyn ResourceSet,
    resource: &str,
    mime: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match assets.load(resource) {
        Ok(data) => http::build_asset_response(data, mime, is_head),
        Err(AssetError::NotFound(path)) => {
            logger::log_warning(&format!("Declared resource missing from asset set: {path}"));
            http::build_404_response()
        }
        Err(e @ AssetError::Io { .. }) => {
            logger::log_error(&e.to_string());
            http::build_500_response()
        }
    }
}
