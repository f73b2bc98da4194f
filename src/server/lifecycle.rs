// Server lifecycle module
// stopped -> running -> stopped: bind eagerly, serve on a dedicated runtime thread, stop once

use std::net::SocketAddr;
use std::sync::{mpsc, Arc};
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tokio::sync::Notify;

use super::connection::ConnectionSettings;
use super::listener::bind_listener;
use super::server_loop::run_server_loop;
use crate::config::{AppState, Config, ServerConfig};
use crate::error::ServerError;
use crate::host::LiveStateAccessor;
use crate::logger;

/// Grace period for in-flight connections once the accept loop ends
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// Entry point for starting the web UI server
pub struct WebUiServer;

impl WebUiServer {
    /// Bind the loopback port and start serving on a background thread
    ///
    /// Binding happens on the calling thread, so a port that is already
    /// taken is reported here as [`ServerError::Bind`]. The runtime is built
    /// and dropped on the server thread only; `start` waits until it is up.
    pub fn start(config: &ServerConfig, state: AppState) -> Result<ServerHandle, ServerError> {
        let std_listener = bind_listener(config.socket_addr())?;
        let local_addr = std_listener.local_addr()?;

        let workers = config.workers;
        let state = Arc::new(state);
        let settings = ConnectionSettings::from(config);
        let shutdown = Arc::new(Notify::new());
        let loop_shutdown = Arc::clone(&shutdown);
        let (ready_tx, ready_rx) = mpsc::channel();

        let thread = std::thread::Builder::new()
            .name("webui-server".to_string())
            .spawn(move || {
                let runtime = match build_runtime(workers) {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };
                let _ = ready_tx.send(Ok(()));

                runtime.block_on(async move {
                    match TcpListener::from_std(std_listener) {
                        Ok(listener) => {
                            run_server_loop(listener, state, settings, loop_shutdown).await;
                        }
                        Err(e) => logger::log_error(&format!("Failed to register listener: {e}")),
                    }
                });
                runtime.shutdown_timeout(SHUTDOWN_GRACE);
                logger::log_server_stopped(&local_addr);
            })?;

        match ready_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                let _ = thread.join();
                return Err(ServerError::Runtime(e));
            }
            Err(_) => {
                let _ = thread.join();
                return Err(ServerError::ThreadPanicked);
            }
        }

        logger::log_server_start(&local_addr, workers);

        Ok(ServerHandle {
            local_addr,
            shutdown,
            thread: Some(thread),
        })
    }
}

fn build_runtime(workers: Option<usize>) -> std::io::Result<Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all().thread_name("webui-worker");
    if let Some(workers) = workers {
        builder.worker_threads(workers.max(1));
    }
    builder.build()
}

/// A running server
///
/// Dropping the handle stops the server the same way [`ServerHandle::stop`]
/// does.
#[derive(Debug)]
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown: Arc<Notify>,
    thread: Option<JoinHandle<()>>,
}

impl ServerHandle {
    /// Address actually bound (useful when the configured port was 0)
    pub const fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop accepting, give in-flight requests a grace period, and join
    pub fn stop(mut self) -> Result<(), ServerError> {
        self.shutdown_and_join()
    }

    fn shutdown_and_join(&mut self) -> Result<(), ServerError> {
        let Some(thread) = self.thread.take() else {
            return Ok(());
        };
        // notify_one stores a permit if the loop is not waiting yet
        self.shutdown.notify_one();
        thread.join().map_err(|_| ServerError::ThreadPanicked)
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown_and_join() {
            logger::log_error(&format!("Web UI server did not stop cleanly: {e}"));
        }
    }
}

/// Start the web UI during host initialization
///
/// Never fails the host: if the server cannot start, the error is logged
/// and `None` is returned so the host carries on without the web UI.
pub fn launch(config: &Config, live_state: Arc<dyn LiveStateAccessor>) -> Option<ServerHandle> {
    let state = AppState::new(live_state).with_logging(&config.logging);
    match WebUiServer::start(&config.server, state) {
        Ok(handle) => {
            logger::log_info(&format!(
                "Web UI running at http://localhost:{}",
                handle.local_addr().port()
            ));
            Some(handle)
        }
        Err(e) => {
            logger::log_bind_failed(&e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{BlockPos, PlayerView};

    struct NoPlayer;

    impl LiveStateAccessor for NoPlayer {
        fn player(&self) -> Option<Box<dyn PlayerView + '_>> {
            None
        }

        fn biome_at(&self, _pos: BlockPos) -> Option<String> {
            None
        }
    }

    fn ephemeral() -> ServerConfig {
        ServerConfig {
            workers: Some(1),
            ..ServerConfig::with_port(0)
        }
    }

    #[test]
    fn test_start_and_stop() {
        let handle = WebUiServer::start(&ephemeral(), AppState::new(Arc::new(NoPlayer))).unwrap();
        assert!(handle.local_addr().ip().is_loopback());
        assert_ne!(handle.local_addr().port(), 0);
        assert!(handle.is_running());
        handle.stop().unwrap();
    }

    #[tokio::test]
    async fn test_start_and_stop_inside_async_context() {
        let handle = WebUiServer::start(&ephemeral(), AppState::new(Arc::new(NoPlayer))).unwrap();
        let stream = tokio::net::TcpStream::connect(handle.local_addr()).await;
        assert!(stream.is_ok());
        drop(stream);
        handle.stop().unwrap();
    }

    #[tokio::test]
    async fn test_bind_failure_inside_async_context() {
        let first = WebUiServer::start(&ephemeral(), AppState::new(Arc::new(NoPlayer))).unwrap();
        let taken = ServerConfig::with_port(first.local_addr().port());

        let err = WebUiServer::start(&taken, AppState::new(Arc::new(NoPlayer))).unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }), "{err:?}");
        first.stop().unwrap();
    }

    #[test]
    fn test_runtime_built_with_requested_workers() {
        let runtime = build_runtime(Some(0)).unwrap();
        assert_eq!(runtime.metrics().num_workers(), 1);
        runtime.shutdown_background();
    }

    #[test]
    fn test_port_released_after_stop() {
        let handle = WebUiServer::start(&ephemeral(), AppState::new(Arc::new(NoPlayer))).unwrap();
        let port = handle.local_addr().port();
        handle.stop().unwrap();

        let again =
            WebUiServer::start(&ServerConfig::with_port(port), AppState::new(Arc::new(NoPlayer)))
                .unwrap();
        again.stop().unwrap();
    }

    #[test]
    fn test_bind_failure_reported() {
        let first = WebUiServer::start(&ephemeral(), AppState::new(Arc::new(NoPlayer))).unwrap();
        let taken = ServerConfig::with_port(first.local_addr().port());

        let err = WebUiServer::start(&taken, AppState::new(Arc::new(NoPlayer))).unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }), "{err:?}");
        first.stop().unwrap();
    }

    #[test]
    fn test_launch_survives_bind_failure() {
        let first = WebUiServer::start(&ephemeral(), AppState::new(Arc::new(NoPlayer))).unwrap();
        let mut config = Config::default();
        config.server.port = first.local_addr().port();

        assert!(launch(&config, Arc::new(NoPlayer)).is_none());
        first.stop().unwrap();
    }
}
