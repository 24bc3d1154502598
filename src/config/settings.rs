use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub application: ApplicationSettings,
    #[serde(default)]
    pub index: IndexSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseSettings {
    pub fn connection_string(&self) -> String {
        if self.host.starts_with("/cloudsql") {
            format!(
                "postgres://{}:{}@localhost/{}?host={}",
                self.username, self.password, self.database_name, self.host
            )
        } else {
            format!(
                "postgres://{}:{}@{}:{}/{}",
                self.username, self.password, self.host, self.port, self.database_name
            )
        }
    }

    /// Connection string safe to log.
    pub fn sanitized_connection_string(&self) -> String {
        let connection_string = self.connection_string();
        if self.password.is_empty() {
            return connection_string;
        }
        connection_string.replace(&self.password, "REDACTED")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    #[serde(default = "default_cors_origin")]
    pub cors_allow_origin: String,
    #[serde(default = "default_cors_methods")]
    pub cors_allow_methods: String,
    #[serde(default = "default_cors_headers")]
    pub cors_allow_headers: String,
}

// Default functions for CORS settings
fn default_cors_origin() -> String {
    "*".to_string()
}

fn default_cors_methods() -> String {
    "GET, OPTIONS".to_string()
}

fn default_cors_headers() -> String {
    "Content-Type".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct IndexSettings {
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_seconds: u64,
    #[serde(default = "default_latest_blocks_limit")]
    pub latest_blocks_limit: i64,
}

fn default_refresh_interval() -> u64 {
    10
}

fn default_latest_blocks_limit() -> i64 {
    20
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            refresh_interval_seconds: default_refresh_interval(),
            latest_blocks_limit: default_latest_blocks_limit(),
        }
    }
}

impl Settings {
    /// Loads `config_name` (any format the `config` crate knows, optional)
    /// and overlays `SECTION__KEY` environment variables.
    pub fn new(config_name: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name(config_name).required(false))
            .add_source(Environment::default().separator("__"))
            // Add default values for critical settings
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 8080)?
            .set_default("database.port", 5432)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .build()?;

        config.try_deserialize()
    }
}
