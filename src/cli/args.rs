//! CLI argument definitions using clap
//!
//! Commands:
//! - folio validate --content <path> [--config <path>]
//! - folio render --content <path> [--config <path>] [--out <path>]

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::{Args, Parser, Subcommand};

use crate::config::OnInvalid;

/// folio - validate portfolio content and render its page view model
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only log warnings and errors
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a content document against the profile schema
    Validate {
        #[command(flatten)]
        content: ContentArgs,
    },

    /// Validate a content document and write its page view model as JSON
    Render {
        #[command(flatten)]
        content: ContentArgs,

        /// Write the view model here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        #[command(flatten)]
        build: BuildArgs,
    },
}

/// Arguments shared by every command that reads content.
#[derive(Args, Debug, Clone)]
pub struct ContentArgs {
    /// Path to the content document
    #[arg(long, default_value = "./content/profile.json")]
    pub content: PathBuf,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reject undeclared fields
    #[arg(long)]
    pub strict: bool,

    /// Whether an invalid document fails the build
    #[arg(long, value_enum)]
    pub on_invalid: Option<OnInvalid>,
}

/// Build metadata injected by the build tool.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// RFC 3339 build time, overriding meta.buildTimestamp
    #[arg(long, value_parser = parse_timestamp)]
    pub build_timestamp: Option<DateTime<FixedOffset>>,

    /// Commit the site was built from
    #[arg(long)]
    pub git_commit: Option<String>,

    /// Bundle size label, overriding meta.bundleSize
    #[arg(long)]
    pub bundle_size: Option<String>,
}

fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(s).map_err(|e| format!("not an RFC 3339 timestamp: {}", e))
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_validate_defaults() {
        let cli = Cli::try_parse_from(["folio", "validate"]).unwrap();
        match cli.command {
            Command::Validate { content } => {
                assert_eq!(content.content, PathBuf::from("./content/profile.json"));
                assert!(content.config.is_none());
                assert!(!content.strict);
                assert!(content.on_invalid.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_render_flags() {
        let cli = Cli::try_parse_from([
            "folio",
            "render",
            "--content",
            "p.json",
            "--on-invalid",
            "report-only",
            "--build-timestamp",
            "2025-01-02T03:04:05Z",
            "--git-commit",
            "abc1234",
            "--quiet",
        ])
        .unwrap();
        assert!(cli.quiet);
        match cli.command {
            Command::Render { content, build, out } => {
                assert_eq!(content.on_invalid, Some(OnInvalid::ReportOnly));
                assert!(build.build_timestamp.is_some());
                assert_eq!(build.git_commit.as_deref(), Some("abc1234"));
                assert!(out.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_bad_timestamp_flag_rejected() {
        let result = Cli::try_parse_from(["folio", "render", "--build-timestamp", "noon"]);
        assert!(result.is_err());
    }
}
