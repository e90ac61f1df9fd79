//! Configuration management with serde serialization/deserialization
//!
//! This module holds every setting a run needs: probe behaviour (timeout, TLS,
//! User-Agent), dispatch pacing (concurrency, delay), output selection and the
//! match filters. A `Config` is built once at startup and shared read-only.

use crate::{FilterSpec, InspectorError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::Semaphore;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36";

/// Main configuration structure for a probing run
///
/// # Examples
///
/// ```rust
/// use link_inspector::Config;
///
/// // Use default configuration
/// let config = Config::default();
/// assert_eq!(config.concurrency, 50);
///
/// // Passive run with a smaller admission gate
/// let config = Config {
///     passive: true,
///     concurrency: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of tasks allowed past the admission gate at once (default: 50)
    pub concurrency: usize,

    /// Deadline for a whole HEAD exchange, connect included (default: 10 seconds)
    pub timeout: Duration,

    /// Skip certificate chain and hostname verification (default: false)
    pub insecure: bool,

    /// User-Agent header sent with every probe
    pub user_agent: String,

    /// Pause each task after its outcome is produced (default: none)
    ///
    /// Paces individual tasks, not global throughput: with concurrency above
    /// one, delayed tasks still overlap.
    pub delay: Option<Duration>,

    /// Classify URLs with a known suffix without issuing a request (default: false)
    pub passive: bool,

    /// Output rendering settings
    pub output: OutputSettings,

    /// Allow-lists applied to request-based results
    pub filters: FilterSpec,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: 50,
            timeout: Duration::from_secs(10),
            insecure: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            delay: None,
            passive: false,
            output: OutputSettings::default(),
            filters: FilterSpec::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub json_style: JsonStyle,
    /// Prefix plain lines with the classification mode
    pub verbose: bool,
    /// Optional file receiving a copy of every record
    pub target: Option<OutputTarget>,
}

/// How each outcome is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bracketed fields without escape codes
    Plain,
    /// Same text as `Plain` with ANSI styling
    #[default]
    Color,
    /// One JSON record per outcome
    Json,
}

/// Indentation preset for JSON records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonStyle {
    #[default]
    Pretty,
    Compact,
}

impl std::str::FromStr for JsonStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" | "MarshalIndent" => Ok(JsonStyle::Pretty),
            "compact" | "Marshal" => Ok(JsonStyle::Compact),
            other => Err(format!(
                "unknown JSON type '{other}' (expected pretty, compact, MarshalIndent or Marshal)"
            )),
        }
    }
}

/// Output file and how it is opened
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    /// Create or truncate
    Overwrite(PathBuf),
    /// Create or append
    Append(PathBuf),
}

impl OutputTarget {
    pub fn path(&self) -> &PathBuf {
        match self {
            OutputTarget::Overwrite(path) | OutputTarget::Append(path) => path,
        }
    }
}

/// Reject settings that would make the run meaningless before any task starts.
pub fn validate_config(config: &Config) -> Result<(), InspectorError> {
    if config.concurrency == 0 {
        return Err(InspectorError::Configuration(
            "Concurrency must be greater than 0".to_string(),
        ));
    }

    if config.concurrency > Semaphore::MAX_PERMITS {
        return Err(InspectorError::Configuration(format!(
            "Concurrency must not exceed {}",
            Semaphore::MAX_PERMITS
        )));
    }

    if config.timeout.is_zero() {
        return Err(InspectorError::Configuration(
            "Timeout must be greater than 0".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(InspectorError::Configuration(
            "User-Agent must not be empty".to_string(),
        ));
    }

    Ok(())
}

/// Parse a delay such as `200ms`, `1s` or `1m30s`.
///
/// A negative or zero value means "no delay" and yields `None`.
pub fn parse_delay(input: &str) -> Result<Option<Duration>, InspectorError> {
    let input = input.trim();
    if input.starts_with('-') || input == "0" {
        return Ok(None);
    }

    let delay = humantime::parse_duration(input)
        .map_err(|e| InspectorError::Configuration(format!("invalid delay '{input}': {e}")))?;
    Ok(Some(delay).filter(|d| !d.is_zero()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.concurrency, 50);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.insecure);
        assert!(!config.passive);
        assert!(config.delay.is_none());
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.output.format, OutputFormat::Color);
        assert_eq!(config.output.json_style, JsonStyle::Pretty);
        assert!(config.output.target.is_none());
        assert!(config.filters.is_empty());
    }

    #[test]
    fn test_validate_config() {
        assert!(validate_config(&Config::default()).is_ok());

        let config = Config {
            concurrency: 0,
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            concurrency: Semaphore::MAX_PERMITS + 1,
            ..Default::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(InspectorError::Configuration(_))
        ));

        let config = Config {
            concurrency: Semaphore::MAX_PERMITS,
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());

        let config = Config {
            timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            user_agent: "  ".to_string(),
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay("200ms").unwrap(), Some(Duration::from_millis(200)));
        assert_eq!(parse_delay("1s").unwrap(), Some(Duration::from_secs(1)));
        assert_eq!(parse_delay("1m30s").unwrap(), Some(Duration::from_secs(90)));
        assert_eq!(parse_delay("500us").unwrap(), Some(Duration::from_micros(500)));
        assert_eq!(parse_delay("1h").unwrap(), Some(Duration::from_secs(3600)));
        assert_eq!(parse_delay("0").unwrap(), None);
        assert_eq!(parse_delay("-1ns").unwrap(), None);
        assert!(matches!(parse_delay("10"), Err(InspectorError::Configuration(_))));
        assert!(matches!(parse_delay("5 parsecs"), Err(InspectorError::Configuration(_))));
        assert!(matches!(parse_delay(""), Err(InspectorError::Configuration(_))));
    }

    #[test]
    fn test_json_style_names() {
        assert_eq!("MarshalIndent".parse::<JsonStyle>(), Ok(JsonStyle::Pretty));
        assert_eq!("Marshal".parse::<JsonStyle>(), Ok(JsonStyle::Compact));
        assert_eq!("compact".parse::<JsonStyle>(), Ok(JsonStyle::Compact));
        assert!("yaml".parse::<JsonStyle>().is_err());
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: Config =
            serde_json::from_str(r#"{"concurrency": 5, "passive": true}"#).unwrap();
        assert_eq!(config.concurrency, 5);
        assert!(config.passive);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
