//! Type-safe configuration types
//!
//! This module provides domain-specific types for configuration values,
//! ensuring validation at boundaries and preventing primitive obsession.

use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Host address for network services
#[nutype(
    validate(not_empty, len_char_max = 255),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Host(String);

impl Default for Host {
    fn default() -> Self {
        Self::try_new("0.0.0.0".to_string()).expect("Default host is valid")
    }
}

/// Port number for network services
#[nutype(
    validate(predicate = |port| (1..=65535).contains(port)),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Port(u16);

impl Default for Port {
    fn default() -> Self {
        Self::try_new(8080).expect("Default port is valid")
    }
}

/// Maximum number of concurrently open dashboard sessions
#[nutype(
    validate(predicate = |count| *count > 0 && *count <= 100_000),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct MaxSessions(usize);

impl Default for MaxSessions {
    fn default() -> Self {
        Self::try_new(1024).expect("Default max sessions is valid")
    }
}

/// Maximum accepted request body size in bytes
///
/// Selection updates are tiny JSON documents; 1 MiB is far beyond any
/// legitimate request.
#[nutype(
    validate(predicate = |bytes| *bytes > 0 && *bytes <= 1024 * 1024),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct BodyLimitBytes(usize);

impl Default for BodyLimitBytes {
    fn default() -> Self {
        Self::try_new(16 * 1024).expect("Default body limit is valid")
    }
}

/// Seconds a session may go without a request before it is reclaimed
#[nutype(
    validate(predicate = |secs| *secs > 0 && *secs <= 7 * 24 * 60 * 60),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct IdleTimeoutSecs(u64);

impl IdleTimeoutSecs {
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(*self.as_ref())
    }
}

impl Default for IdleTimeoutSecs {
    fn default() -> Self {
        Self::try_new(30 * 60).expect("Default idle timeout is valid")
    }
}

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {s}")),
        }
    }
}

/// Log format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Json => "json",
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!("Invalid log format: {s}")),
        }
    }
}
