//! Typed configuration from environment variables and an optional TOML file.
//!
//! Loads once at startup. Every field is optional; missing queue settings
//! are asked for interactively and the log level defaults to "info".

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::QueueKind;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub initial_capacity: Option<usize>,
    pub kind: Option<QueueKind>,
    pub otel_endpoint: Option<String>,
    pub log_level: Option<String>,
}

/// Top-level TOML layout.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    queue: QueueSection,
    #[serde(default)]
    telemetry: TelemetrySection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct QueueSection {
    initial_capacity: Option<usize>,
    kind: Option<QueueKind>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TelemetrySection {
    endpoint: Option<String>,
    log_level: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// In local dev, call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            initial_capacity: optional_var("QUEUE_INITIAL_CAPACITY")?
                .map(|v| {
                    v.parse::<usize>().map_err(|e| {
                        Error::Config(format!("QUEUE_INITIAL_CAPACITY={v} is not a size: {e}"))
                    })
                })
                .transpose()?,
            kind: optional_var("QUEUE_KIND")?
                .map(|v| v.parse::<QueueKind>().map_err(Error::Config))
                .transpose()?,
            otel_endpoint: optional_var("OTEL_ENDPOINT")?,
            log_level: optional_var("LOG_LEVEL")?,
        })
    }

    /// Load configuration from a TOML file with `[queue]` and `[telemetry]` tables.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read config {}: {e}", path.display())))?;
        let file: FileConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("bad config {}: {e}", path.display())))?;
        Ok(Self::from_file_config(file))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: FileConfig =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self::from_file_config(file))
    }

    fn from_file_config(file: FileConfig) -> Self {
        Self {
            initial_capacity: file.queue.initial_capacity,
            kind: file.queue.kind,
            otel_endpoint: file.telemetry.endpoint,
            log_level: file.telemetry.log_level,
        }
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: Config) -> Self {
        Self {
            initial_capacity: other.initial_capacity.or(self.initial_capacity),
            kind: other.kind.or(self.kind),
            otel_endpoint: other.otel_endpoint.or(self.otel_endpoint),
            log_level: other.log_level.or(self.log_level),
        }
    }

    /// The configured log level, or "info" when none was set anywhere.
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

fn optional_var(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(v) if v.trim().is_empty() => Ok(None),
        Ok(v) => Ok(Some(v.trim().to_string())),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(Error::Config(format!("{name}: {e}"))),
    }
}
