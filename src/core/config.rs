//! Server configuration
//!
//! Every setting can be overridden through an environment variable:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | DATA_DIR | ./data/rh | Embedded database directory |
//! | HTTP_PORT | 3000 | HTTP API port |
//! | DB_NAMESPACE | iud | Database namespace |
//! | DB_NAME | iud_antioquia_rh | Logical database name |
//! | LOG_DIR | (unset) | Optional directory for daily log files |

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the embedded database files
    pub data_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Storage namespace
    pub db_namespace: String,
    /// Logical database name
    pub db_name: String,
    /// Optional directory for file logging
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data/rh".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "iud".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "iud_antioquia_rh".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the storage location and port, commonly used in tests
    pub fn with_overrides(data_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config.http_port = http_port;
        config
    }
}
