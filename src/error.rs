use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single HEAD probe. Contained within the task that produced it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProbeError {
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Transport(String),
}

impl ProbeError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProbeError::Timeout(_))
    }

    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ProbeError::Timeout(timeout)
        } else {
            ProbeError::Transport(err.to_string())
        }
    }
}

/// Errors that abort the whole run.
#[derive(Debug, Clone, Error)]
pub enum InspectorError {
    #[error("Error opening input file {path}: {reason}")]
    InputFile { path: String, reason: String },

    #[error("Error opening output file {path}: {reason}")]
    OutputFile { path: String, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl InspectorError {
    pub fn input_file(path: &Path, err: std::io::Error) -> Self {
        InspectorError::InputFile {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    pub fn output_file(path: &Path, err: std::io::Error) -> Self {
        InspectorError::OutputFile {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for InspectorError {
    fn from(err: std::io::Error) -> Self {
        InspectorError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for InspectorError {
    fn from(err: serde_json::Error) -> Self {
        InspectorError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_error_kind() {
        assert!(ProbeError::Timeout(Duration::from_secs(10)).is_timeout());
        assert!(!ProbeError::Transport("connection refused".to_string()).is_timeout());
    }

    #[test]
    fn test_error_messages() {
        let err = InspectorError::input_file(
            Path::new("urls.txt"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "Error opening input file urls.txt: not found");

        let err = ProbeError::Timeout(Duration::from_secs(3));
        assert_eq!(err.to_string(), "Timeout after 3s");
    }
}
