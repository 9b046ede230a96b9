//! Runner configuration read from the environment.

use std::env;
use std::str::FromStr;

use adflow_advertising::domain::registry::StaffMember;

use crate::error::AppError;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::Config(format!(
                "ADFLOW_LOG_FORMAT must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

/// How the lifecycle stages are invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Call the operators directly.
    Direct,
    /// Queue each stage as commands and drain them with the executor.
    #[default]
    Queued,
}

impl FromStr for RunMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(Self::Direct),
            "queued" => Ok(Self::Queued),
            other => Err(AppError::Config(format!(
                "ADFLOW_MODE must be `direct` or `queued`, got `{other}`"
            ))),
        }
    }
}

/// Runner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub log_format: LogFormat,
    pub mode: RunMode,
    pub staff: StaffMember,
}

impl DemoConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an unsupported value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an unsupported value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let log_format = lookup("ADFLOW_LOG_FORMAT")
            .map(|value| value.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();
        let mode = lookup("ADFLOW_MODE")
            .map(|value| value.parse::<RunMode>())
            .transpose()?
            .unwrap_or_default();
        let staff = StaffMember::new(
            lookup("ADFLOW_STAFF_ID").unwrap_or_else(|| "M001".to_string()),
            lookup("ADFLOW_STAFF_NAME").unwrap_or_else(|| "John Doe".to_string()),
        );

        Ok(Self {
            log_format,
            mode,
            staff,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{DemoConfig, LogFormat, RunMode};
    use crate::error::AppError;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = DemoConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.mode, RunMode::Queued);
        assert_eq!(config.staff.id, "M001");
        assert_eq!(config.staff.name, "John Doe");
    }

    #[test]
    fn test_reads_every_variable() {
        let config = DemoConfig::from_lookup(lookup(&[
            ("ADFLOW_LOG_FORMAT", "json"),
            ("ADFLOW_MODE", "direct"),
            ("ADFLOW_STAFF_ID", "M002"),
            ("ADFLOW_STAFF_NAME", "Jane Roe"),
        ]))
        .unwrap();

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.mode, RunMode::Direct);
        assert_eq!(config.staff.id, "M002");
        assert_eq!(config.staff.name, "Jane Roe");
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let result = DemoConfig::from_lookup(lookup(&[("ADFLOW_MODE", "parallel")]));

        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("parallel")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
