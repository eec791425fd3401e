//! Server Configuration

use std::path::PathBuf;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Runtime settings, read from the environment after `.env` is loaded
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// JSON catalog shaped like the `/plans` response; built-in when unset
    pub plans_file: Option<PathBuf>,

    /// Directory with the built WASM frontend
    pub static_dir: PathBuf,

    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            plans_file: None,
            static_dir: PathBuf::from("static"),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl ServerConfig {
    /// Load `.env` when present, then read the environment.
    ///
    /// Everything that depends on the environment, logging included, is
    /// configured from the returned value.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            plans_file: std::env::var_os("PLANS_FILE").map(PathBuf::from),
            static_dir: std::env::var_os("STATIC_DIR")
                .map_or(defaults.static_dir, PathBuf::from),
            log_filter: std::env::var("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.plans_file.is_none());
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_log_filter_read_from_env_file() {
        let path = std::env::temp_dir().join(format!("landing-server-{}.env", std::process::id()));
        std::fs::write(&path, "RUST_LOG=landing_server=trace\n").unwrap();

        dotenvy::from_path_override(&path).unwrap();
        let config = ServerConfig::from_env();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.log_filter, "landing_server=trace");
    }
}
