use crate::domain::config_types::{
    BodyLimitBytes, Host, IdleTimeoutSecs, LogFormat, LogLevel, MaxSessions, Port,
};
pub use config::ConfigError;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Prefix of environment variable overrides, e.g. `MR_DASHBOARD__APPLICATION__PORT`
pub const ENV_PREFIX: &str = "MR_DASHBOARD";

pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/rfordatascience/tidytuesday/main/data/2025/2025-06-24/cases_month.csv";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub dataset: DatasetSettings,
    pub sessions: SessionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: Host,
    pub port: Port,
    pub environment: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    /// Local copy of the monthly case table
    pub path: PathBuf,
    /// Where the local copy was fetched from; informational only
    pub source_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub max_sessions: MaxSessions,
    pub max_body_bytes: BodyLimitBytes,
    /// Sessions idle for longer than this are dropped
    pub idle_timeout_secs: IdleTimeoutSecs,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 8080)?
            .set_default("application.environment", environment.clone())?
            .set_default("dataset.path", "data/cases_month.csv")?
            .set_default("dataset.source_url", DEFAULT_SOURCE_URL)?
            .set_default("sessions.max_sessions", 1024)?
            .set_default("sessions.max_body_bytes", 16 * 1024)?
            .set_default("sessions.idle_timeout_secs", 30 * 60)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }
}
