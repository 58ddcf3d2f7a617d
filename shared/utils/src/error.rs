use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FundtraceError {
    #[error("{path}: {message}")]
    Io { path: String, message: String },

    #[error("PDF parse error: {message}")]
    Parse { message: String },

    #[error("Invalid funding pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Cannot traverse {path}: {message}")]
    Traversal { path: String, message: String },

    #[error("Report error: {message}")]
    Report { message: String },
}

impl FundtraceError {
    pub fn io(path: &Path, error: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn traversal(path: &Path, message: impl Into<String>) -> Self {
        Self::Traversal {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO_ERROR",
            Self::Parse { .. } => "PARSE_ERROR",
            Self::Pattern { .. } => "PATTERN_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Traversal { .. } => "TRAVERSAL_ERROR",
            Self::Report { .. } => "REPORT_ERROR",
        }
    }
}

pub type FundtraceResult<T> = Result<T, FundtraceError>;

impl From<config::ConfigError> for FundtraceError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}

impl From<serde_json::Error> for FundtraceError {
    fn from(error: serde_json::Error) -> Self {
        Self::report(error.to_string())
    }
}
