// Connection handling module
// Serves one accepted TCP connection on its own task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{AppState, ServerConfig};
use crate::handler;
use crate::logger;

/// Per-connection settings derived from [`ServerConfig`]
#[derive(Debug, Clone, Copy)]
pub struct ConnectionSettings {
    pub keep_alive: bool,
    /// Longest wait for a complete request head, idle keep-alive included
    pub timeout: Duration,
}

impl From<&ServerConfig> for ConnectionSettings {
    fn from(config: &ServerConfig) -> Self {
        Self {
            keep_alive: config.keep_alive,
            timeout: Duration::from_secs(config.connection_timeout.max(1)),
        }
    }
}

/// Accept a connection and hand it to a spawned task
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
/// * `conn_counter` - Active connection counter
/// * `settings` - Keep-alive and timeout settings
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
    settings: ConnectionSettings,
) {
    let active = conn_counter.fetch_add(1, Ordering::SeqCst) + 1;
    logger::log_debug(&format!(
        "[Connection] Accepted from {peer_addr} ({active} active)"
    ));

    handle_connection(
        stream,
        peer_addr,
        Arc::clone(state),
        Arc::clone(conn_counter),
        settings,
    );
}

/// Serve a single connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Configures HTTP/1.1 keep-alive and the request head read timeout
/// 3. Serves the connection with the request handler
/// 4. Decrements connection counter when done
///
/// A connection that keeps sending requests stays open however long it
/// lives; only a client that goes quiet for `settings.timeout` is dropped,
/// and never in the middle of a response.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    conn_counter: Arc<AtomicUsize>,
    settings: ConnectionSettings,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder
            .keep_alive(settings.keep_alive)
            .timer(TokioTimer::new())
            .header_read_timeout(settings.timeout);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&state), peer_addr)),
        );

        match conn.await {
            Ok(()) => {}
            Err(err) if err.is_timeout() => {
                logger::log_debug(&format!(
                    "Connection from {peer_addr} idle for {} seconds, closing",
                    settings.timeout.as_secs()
                ));
            }
            Err(err) => logger::log_connection_error(&err),
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}
