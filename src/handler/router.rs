//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method check, exact-match route
//! lookup, dispatch, and access logging.

use crate::config::AppState;
use crate::handler::{snapshot, static_files};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::RouteKind;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
#[allow(clippy::unused_async)]
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let response = dispatch(&state, req.method(), req.uri().path());

    if state.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.referer = header_string(&req, "referer");
        entry.user_agent = header_string(&req, "user-agent");
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, state.access_log_format);
    }

    Ok(response)
}

/// Produce the response for one request path
///
/// The query string is not part of `path`. A panic raised while building
/// the response (for example inside the host's state accessor) becomes a
/// 500 and does not reach the connection task.
pub fn dispatch(state: &AppState, method: &Method, path: &str) -> Response<Full<Bytes>> {
    let is_head = match *method {
        Method::GET => false,
        Method::HEAD => true,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method} {path}"));
            return http::build_405_response();
        }
    };

    let Some(route) = state.routes.lookup(path) else {
        logger::log_debug(&format!("No route for {path}"));
        return http::build_404_response();
    };

    let result = panic::catch_unwind(AssertUnwindSafe(|| match route {
        RouteKind::StaticAsset { resource, mime } => {
            static_files::serve_asset(state.assets.as_ref(), resource, mime, is_head)
        }
        RouteKind::PlayerSnapshot => snapshot::serve_player(state.live_state.as_ref(), is_head),
    }));

    result.unwrap_or_else(|_| {
        logger::log_error(&format!("Handler for {path} panicked"));
        http::build_500_response()
    })
}

fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
