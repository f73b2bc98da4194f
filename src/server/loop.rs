// Server loop module
// Accepts connections until the shutdown signal fires

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::{accept_connection, ConnectionSettings};
use crate::config::AppState;
use crate::logger;

/// Accept loop for the web UI listener
///
/// Accept errors are logged and the loop keeps going; only `shutdown`
/// ends it. Connections already being served finish on their own tasks.
pub async fn run_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    settings: ConnectionSettings,
    shutdown: Arc<Notify>,
) {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                            settings,
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_debug("Shutdown signal received, closing listener");
                break;
            }
        }
    }
}
