//! Common types and utilities shared across CLI commands.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use console::style;
use geotrail::config::ConfigFile;
use geotrail::document::{parse_document, unwrap_tagged};
use geotrail::{FormatTag, Pipeline};
use serde_json::Value;

use crate::error::CliError;

/// Export format selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// iPhone/iOS Format (location-history.json)
    Ios,
    /// Android Format (Timeline.json - old)
    Android,
    /// Android Format (semanticSegments - new)
    AndroidSemantic,
}

impl From<FormatArg> for FormatTag {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Ios => FormatTag::Ios,
            FormatArg::Android => FormatTag::AndroidLegacy,
            FormatArg::AndroidSemantic => FormatTag::AndroidSemantic,
        }
    }
}

/// Arguments shared by commands that read a location-history file.
#[derive(Debug, Clone, Args)]
pub struct DocumentArgs {
    /// Location-history export (.json)
    pub file: PathBuf,

    /// Export format; may be omitted for files saved with a format tag
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Path the configuration was loaded from
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: ConfigFile,
}

impl Context {
    /// Build the analysis pipeline from the configuration.
    pub fn pipeline(&self) -> Result<Pipeline, CliError> {
        let regions = self
            .config
            .region_table()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(Pipeline::new(self.config.pipeline_config(), regions))
    }
}

/// A document read from disk with its declared format.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub content: Value,
    pub format: FormatTag,
}

impl LoadedDocument {
    /// File name for status output.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// One-line description of the loaded file.
    pub fn status_line(&self) -> String {
        format!(
            "{} ({}) as {}",
            self.file_name(),
            format_file_size(self.size_bytes),
            self.format.description()
        )
    }
}

/// Read and parse a location-history file.
///
/// An explicit `format` always wins. Without one, the file must be a
/// `{"content": ..., "format": ...}` wrapper.
pub fn load_document(path: &Path, format: Option<FormatArg>) -> Result<LoadedDocument, CliError> {
    let display = path.display().to_string();

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if !is_json {
        return Err(CliError::NotJsonFile(display));
    }

    let text = std::fs::read_to_string(path).map_err(|error| CliError::FileRead {
        path: display.clone(),
        error,
    })?;
    let value = parse_document(&text).map_err(|error| CliError::InvalidJson {
        path: display.clone(),
        error,
    })?;

    let (content, tagged) = unwrap_tagged(value);
    let format = format
        .map(FormatTag::from)
        .or(tagged)
        .ok_or(CliError::MissingFormat(display))?;

    tracing::debug!(path = %path.display(), format = %format, bytes = text.len(), "document loaded");

    Ok(LoadedDocument {
        path: path.to_path_buf(),
        size_bytes: text.len() as u64,
        content,
        format,
    })
}

/// Load a document and print its status line.
pub fn load_and_report(args: &DocumentArgs) -> Result<LoadedDocument, CliError> {
    let document = load_document(&args.file, args.format)?;
    eprintln!("{} {}", style("Loaded").cyan().bold(), document.status_line());
    Ok(document)
}

/// Format a byte count as `Bytes`, `KB`, `MB` or `GB` with up to two decimals.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    const K: f64 = 1024.0;

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= K && unit < UNITS.len() - 1 {
        value /= K;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}
