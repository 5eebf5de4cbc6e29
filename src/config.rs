//! Build configuration
//!
//! Optional JSON file, conventionally `folio.json`:
//!
//! ```json
//! {
//!   "onInvalid": "fail-build",
//!   "strict": false,
//!   "monthStyle": "short",
//!   "build": { "buildTimestamp": "...", "gitCommit": "...", "bundleSize": "..." }
//! }
//! ```
//!
//! Every field has a default, so an empty object is a valid configuration.
//! Command-line flags override file values.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::{BuildInfo, MonthStyle, RenderOptions};
use crate::schema::ValidationOptions;

/// What an invalid content document does to the build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OnInvalid {
    /// Report violations and exit non-zero
    #[default]
    FailBuild,
    /// Report violations and exit zero; nothing is rendered
    ReportOnly,
}

impl OnInvalid {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnInvalid::FailBuild => "fail-build",
            OnInvalid::ReportOnly => "report-only",
        }
    }
}

impl fmt::Display for OnInvalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {reason}")]
    Read { path: String, reason: String },

    #[error("invalid config '{path}': {reason}")]
    Parse { path: String, reason: String },

    #[error("invalid config value: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub on_invalid: OnInvalid,

    /// Reject undeclared fields in content documents (default: false)
    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub month_style: MonthStyle,

    /// Values injected by the build tool
    #[serde(default)]
    pub build: BuildInfo,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Loads `path` when given, otherwise returns defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies values passed on the command line over the file's `build`
    /// section and re-checks them.
    pub fn with_build_overrides(mut self, overrides: BuildInfo) -> ConfigResult<Self> {
        if overrides.build_timestamp.is_some() {
            self.build.build_timestamp = overrides.build_timestamp;
        }
        if overrides.git_commit.is_some() {
            self.build.git_commit = overrides.git_commit;
        }
        if overrides.bundle_size.is_some() {
            self.build.bundle_size = overrides.bundle_size;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> ConfigResult<()> {
        if let Some(commit) = &self.build.git_commit {
            if commit.is_empty() || !commit.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ConfigError::Invalid(format!(
                    "build.gitCommit must be a hex commit id, got '{}'",
                    commit
                )));
            }
        }

        if matches!(&self.build.bundle_size, Some(size) if size.trim().is_empty()) {
            return Err(ConfigError::Invalid("build.bundleSize must not be empty".into()));
        }

        Ok(())
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            strict: self.strict,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            month_style: self.month_style,
            build: self.build.clone(),
        }
    }
}
