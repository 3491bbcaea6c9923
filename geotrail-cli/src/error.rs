//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use geotrail::config::ConfigFileError;
use geotrail::document::DocumentError;
use geotrail::region::RegionError;
use geotrail::validate::ValidationError;
use geotrail::{PipelineError, ValidationReport};

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Input file does not have a `.json` extension
    NotJsonFile(String),
    /// Failed to read input file
    FileRead { path: String, error: std::io::Error },
    /// Input file is not valid JSON
    InvalidJson { path: String, error: DocumentError },
    /// No `--format` given and the file carries no format tag
    MissingFormat(String),
    /// Validation rejected the document
    Rejected(ValidationReport),
    /// Region key not in the region table
    UnknownRegion(RegionError),
    /// Failed to write output file
    FileWrite { path: String, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        let hints = self.hints();
        if !hints.is_empty() {
            eprintln!();
            for line in hints {
                eprintln!("{}", line);
            }
        }

        process::exit(1)
    }

    /// Additional help printed after the error message.
    fn hints(&self) -> &'static [&'static str] {
        match self {
            CliError::MissingFormat(_) => &[
                "Choose the format of your export with --format:",
                "  ios               iPhone/iOS Format (location-history.json)",
                "  android           Android Format (Timeline.json - old)",
                "  android-semantic  Android Format (semanticSegments - new)",
            ],
            CliError::Rejected(ValidationReport {
                rejection: Some(ValidationError::StructuralMismatch { .. }),
                ..
            }) => &[
                "The format is never guessed from the file contents.",
                "Check that --format matches the app the file was exported from.",
            ],
            CliError::UnknownRegion(_) => {
                &["Run 'geotrail list-regions' to see available regions."]
            }
            _ => &[],
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::NotJsonFile(path) => {
                write!(f, "'{}' is not a .json file", path)
            }
            CliError::FileRead { path, error } => {
                write!(f, "Failed to read file '{}': {}", path, error)
            }
            CliError::InvalidJson { path, error } => write!(f, "{} ({})", error, path),
            CliError::MissingFormat(path) => {
                write!(f, "No format given for '{}'", path)
            }
            CliError::Rejected(report) => write!(f, "{}", report.message),
            CliError::UnknownRegion(e) => write!(f, "{}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::FileRead { error, .. } => Some(error),
            CliError::InvalidJson { error, .. } => Some(error),
            CliError::UnknownRegion(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<RegionError> for CliError {
    fn from(e: RegionError) -> Self {
        CliError::UnknownRegion(e)
    }
}

impl From<PipelineError> for CliError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::UnknownRegion(e) => CliError::UnknownRegion(e),
            PipelineError::Rejected(report) => CliError::Rejected(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotrail::{validate, FormatTag};
    use serde_json::json;

    #[test]
    fn test_rejected_displays_report_message() {
        let report = validate(&json!({"semanticSegments": []}), FormatTag::AndroidSemantic);
        let err = CliError::Rejected(report);
        assert!(err.to_string().starts_with("your file is empty"));
    }

    #[test]
    fn test_format_hint_only_for_structural_mismatch() {
        let mismatch = CliError::Rejected(validate(
            &json!({"semanticSegments": []}),
            FormatTag::Ios,
        ));
        assert!(mismatch.hints()[0].starts_with("The format is never guessed"));

        let empty = CliError::Rejected(validate(&json!([]), FormatTag::Ios));
        assert!(empty.hints().is_empty());

        let no_activity = CliError::Rejected(validate(&json!([{"visit": {}}]), FormatTag::Ios));
        assert!(no_activity.hints().is_empty());
    }

    #[test]
    fn test_missing_format_lists_choices() {
        let hints = CliError::MissingFormat("saved.json".into()).hints();
        assert_eq!(hints.len(), 4);
        assert!(hints[2].contains("android"));
    }

    #[test]
    fn test_pipeline_error_conversion() {
        let err: CliError =
            PipelineError::UnknownRegion(RegionError::UnknownRegion("atlantis".into())).into();
        assert!(matches!(err, CliError::UnknownRegion(_)));
        assert_eq!(err.to_string(), "unknown region 'atlantis'");
    }

    #[test]
    fn test_file_errors_have_source() {
        use std::error::Error;
        let err = CliError::FileRead {
            path: "history.json".into(),
            error: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "Failed to read file 'history.json': missing");
    }
}
