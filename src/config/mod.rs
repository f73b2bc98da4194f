// Configuration module entry point
// Loads layered configuration and holds the per-server request state

mod state;
mod types;

use std::net::{Ipv4Addr, SocketAddr};

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, ServerConfig, DEFAULT_PORT};

/// Config file looked up when none is given (extension optional)
pub const DEFAULT_CONFIG_PATH: &str = "webui";

/// Environment variable prefix, e.g. `WEBUI__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "WEBUI";

impl Config {
    /// Load configuration from the default file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; environment variables override it and
    /// built-in defaults fill the rest.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.keep_alive", true)?
            .set_default("server.connection_timeout", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .build()?;

        settings.try_deserialize()
    }
}

impl ServerConfig {
    /// Loopback socket address for the configured port
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does-not-exist/webui-test").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.server.keep_alive);
        assert_eq!(cfg.server.connection_timeout, 30);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.access_log_format, "common");
        assert!(cfg.logging.access_log_file.is_none());
    }

    #[test]
    fn test_load_matches_default_impl() {
        let loaded = Config::load_from("does-not-exist/webui-test").unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("player-status-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("webui.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9123\nworkers = 2\n\n[logging]\nlevel = \"debug\"\naccess_log = false\n",
        )
        .unwrap();

        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9123);
        assert_eq!(cfg.server.workers, Some(2));
        assert_eq!(cfg.logging.level, "debug");
        assert!(!cfg.logging.access_log);
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_socket_addr_is_loopback() {
        let addr = ServerConfig::with_port(9000).socket_addr();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 9000);
    }
}
