//! CLI command implementations
//!
//! Both commands share one pipeline: load config, read and validate the
//! content document, then either report or render. Rendering never starts
//! on an invalid document.

use std::path::Path;

use serde_json::json;

use crate::config::{Config, OnInvalid};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::render::{BuildInfo, FooterBranch, Renderer};
use crate::schema::{Profile, ProfileLoader, ProfileValidator, ValidationReport};

use super::args::{BuildArgs, Command, ContentArgs};
use super::errors::{CliError, CliResult};
use super::io::{write_document, write_response, write_violations};

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    if cli.quiet {
        crate::observability::Logger::set_min_severity(crate::observability::Severity::Warn);
    }
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Validate { content } => validate(&content),
        Command::Render {
            content,
            out,
            build,
        } => render(&content, out.as_deref(), build),
    }
}

/// Validate command
///
/// Writes a JSON summary to stdout and every violation to stderr. Fails
/// only when the document is invalid and `onInvalid` is `fail-build`.
pub fn validate(args: &ContentArgs) -> CliResult<()> {
    let config = load_config(args)?;
    let (_, report) = check_content(args, &config)?;

    write_response(json!({
        "content": args.content.display().to_string(),
        "valid": report.is_valid(),
        "violations": report.len(),
        "warnings": report.warnings.len(),
        "onInvalid": config.on_invalid.as_str(),
    }))?;

    enforce(&config, &report)
}

/// Render command
///
/// Writes the page view model to `out` or stdout. An invalid document
/// renders nothing.
pub fn render(args: &ContentArgs, out: Option<&Path>, build: BuildArgs) -> CliResult<()> {
    let config = load_config(args)?.with_build_overrides(BuildInfo {
        build_timestamp: build.build_timestamp,
        git_commit: build.git_commit,
        bundle_size: build.bundle_size,
    })?;

    let (profile, report) = check_content(args, &config)?;
    let Some(profile) = profile else {
        return enforce(&config, &report);
    };

    render_profile(&config, &profile, out)
}

fn render_profile(config: &Config, profile: &Profile, out: Option<&Path>) -> CliResult<()> {
    log_event(Event::RenderStart);

    let view = Renderer::new(config.render_options()).render(profile);
    if matches!(view.footer.branch, FooterBranch::Minimal) {
        log_event_with_fields(
            Event::MetaFallback,
            &[("reason", "no enhanced meta and no agents")],
        );
    }

    write_document(&view, out)?;

    let target = out.map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
    log_event_with_fields(Event::RenderComplete, &[("out", target.as_str())]);
    Ok(())
}

fn load_config(args: &ContentArgs) -> CliResult<Config> {
    let mut config = Config::load_or_default(args.config.as_deref())?;

    if args.strict {
        config.strict = true;
    }
    if let Some(on_invalid) = args.on_invalid {
        config.on_invalid = on_invalid;
    }

    let source = args
        .config
        .as_ref()
        .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("source", source.as_str()),
            ("on_invalid", config.on_invalid.as_str()),
            ("strict", if config.strict { "true" } else { "false" }),
        ],
    );

    Ok(config)
}

/// Reads and validates the content document, reporting every problem.
fn check_content(
    args: &ContentArgs,
    config: &Config,
) -> CliResult<(Option<Profile>, ValidationReport)> {
    let path = args.content.display().to_string();
    let loader = ProfileLoader::new(
        &args.content,
        ProfileValidator::new(config.validation_options()),
    );

    log_event_with_fields(Event::ValidationStart, &[("path", path.as_str())]);
    let (profile, report) = loader.inspect()?;
    log_event_with_fields(Event::ContentLoaded, &[("path", path.as_str())]);

    for warning in &report.warnings {
        log_event_with_fields(Event::ValidationWarning, &[("message", warning.as_str())]);
    }

    if report.is_valid() {
        log_event_with_fields(Event::ValidationPassed, &[("path", path.as_str())]);
    } else {
        for violation in &report.violations {
            log_event_with_fields(
                Event::ViolationReported,
                &[("path", violation.path.as_str()), ("code", violation.kind.code())],
            );
        }
        let count = report.len().to_string();
        log_event_with_fields(
            Event::ValidationFailed,
            &[("path", path.as_str()), ("violations", count.as_str())],
        );
    }

    write_violations(&report)?;
    Ok((profile, report))
}

fn enforce(config: &Config, report: &ValidationReport) -> CliResult<()> {
    match config.on_invalid {
        OnInvalid::FailBuild if !report.is_valid() => Err(CliError::invalid_content(report.len())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use crate::schema::fixtures::sample_document;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn content_args(path: PathBuf) -> ContentArgs {
        ContentArgs {
            content: path,
            config: None,
            strict: false,
            on_invalid: None,
        }
    }

    fn write_content(dir: &TempDir, document: &serde_json::Value) -> PathBuf {
        let path = dir.path().join("profile.json");
        fs::write(&path, document.to_string()).unwrap();
        path
    }

    fn invalid_document() -> serde_json::Value {
        let mut doc = sample_document();
        doc["hero"].as_object_mut().unwrap().remove("name");
        doc
    }

    #[test]
    fn test_validate_valid_content() {
        let dir = TempDir::new().unwrap();
        let path = write_content(&dir, &sample_document());
        assert!(validate(&content_args(path)).is_ok());
    }

    #[test]
    fn test_validate_invalid_content_fails_build() {
        let dir = TempDir::new().unwrap();
        let path = write_content(&dir, &invalid_document());
        let err = validate(&content_args(path)).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::InvalidContent);
    }

    #[test]
    fn test_validate_report_only_succeeds() {
        let dir = TempDir::new().unwrap();
        let path = write_content(&dir, &invalid_document());
        let mut args = content_args(path);
        args.on_invalid = Some(OnInvalid::ReportOnly);
        assert!(validate(&args).is_ok());
    }

    #[test]
    fn test_render_writes_view() {
        let dir = TempDir::new().unwrap();
        let path = write_content(&dir, &sample_document());
        let out = dir.path().join("view.json");

        render(&content_args(path), Some(&out), BuildArgs::default()).unwrap();

        let view: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(view["hero"]["name"], "Alex Rivera");
    }

    #[test]
    fn test_render_invalid_report_only_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_content(&dir, &invalid_document());
        let out = dir.path().join("view.json");
        let mut args = content_args(path);
        args.on_invalid = Some(OnInvalid::ReportOnly);

        render(&args, Some(&out), BuildArgs::default()).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn test_render_rejects_bad_commit_flag() {
        let dir = TempDir::new().unwrap();
        let path = write_content(&dir, &sample_document());
        let build = BuildArgs {
            git_commit: Some("HEAD~1".into()),
            ..BuildArgs::default()
        };
        let err = render(&content_args(path), None, build).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_missing_content_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = validate(&content_args(dir.path().join("absent.json"))).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::IoError);
    }

    #[test]
    fn test_malformed_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{ not json").unwrap();
        let err = validate(&content_args(path)).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::MalformedContent);
    }
}
