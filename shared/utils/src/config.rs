use config::{Config, ConfigError, Environment, File};
use fundtrace_models::PatternList;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{FundtraceError, FundtraceResult};

pub const DEFAULT_ERROR_LOG: &str = "funding_extraction_errors.log";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scan: ScanConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

/// Everything the walker needs for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub root_folder: Option<PathBuf>,
    pub log_file_path: PathBuf,
    pub pattern_list: PatternList,
    /// Sort directory entries by file name instead of filesystem order.
    pub sort_entries: bool,
    pub show_progress: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None)
    }

    /// Layered load: defaults, `config/*` files, an explicit file, then
    /// `FUNDTRACE__SECTION__KEY` environment variables.
    pub fn load_with(explicit_file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            .add_source(File::with_name("config/local").required(false));

        if let Some(path) = explicit_file {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        builder
            .add_source(Environment::with_prefix("FUNDTRACE").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn validate(&self) -> FundtraceResult<()> {
        self.scan.root()?;

        if self.scan.pattern_list.is_empty() {
            return Err(FundtraceError::configuration("pattern list is empty"));
        }
        if self.scan.log_file_path.as_os_str().is_empty() {
            return Err(FundtraceError::configuration("error log path is empty"));
        }

        Ok(())
    }
}

impl ScanConfig {
    pub fn new(root_folder: impl Into<PathBuf>) -> Self {
        Self {
            root_folder: Some(root_folder.into()),
            ..Self::default()
        }
    }

    pub fn root(&self) -> FundtraceResult<&Path> {
        self.root_folder
            .as_deref()
            .filter(|root| !root.as_os_str().is_empty())
            .ok_or_else(|| FundtraceError::configuration("no root folder configured"))
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file_path = path.into();
        self
    }

    pub fn with_patterns(mut self, patterns: PatternList) -> Self {
        self.pattern_list = patterns;
        self
    }

    pub fn with_sorted_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root_folder: None,
            log_file_path: PathBuf::from(DEFAULT_ERROR_LOG),
            pattern_list: PatternList::default(),
            sort_entries: false,
            show_progress: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
            file_path: None,
        }
    }
}
