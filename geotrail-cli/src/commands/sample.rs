//! `geotrail sample`: write a built-in sample location history.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use console::style;
use geotrail::document::TaggedDocument;
use geotrail::sample::{sample_document, sample_file_name, SampleCity};
use geotrail::FormatTag;
use serde_json::Value;

use super::common::FormatArg;
use crate::error::CliError;

/// Sample city selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CityArg {
    /// New York City (NYC)
    Nyc,
    /// Bangkok (BKK)
    Bkk,
}

impl From<CityArg> for SampleCity {
    fn from(arg: CityArg) -> Self {
        match arg {
            CityArg::Nyc => SampleCity::Nyc,
            CityArg::Bkk => SampleCity::Bkk,
        }
    }
}

/// Arguments for the sample command.
#[derive(Debug, Clone, Args)]
pub struct SampleArgs {
    /// Export format of the sample
    #[arg(long, value_enum, default_value = "ios")]
    pub format: FormatArg,

    /// City the sample points are in
    #[arg(long, value_enum, default_value = "nyc")]
    pub city: CityArg,

    /// Wrap the sample with its format tag so --format can be omitted later
    #[arg(long)]
    pub tagged: bool,

    /// Output file or directory (stdout if omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Run the sample command.
pub fn run(args: SampleArgs) -> Result<(), CliError> {
    let format = FormatTag::from(args.format);
    let city = SampleCity::from(args.city);
    let document = build_sample(format, city, args.tagged);

    match &args.output {
        Some(output) => {
            let path = output_path(output, format, city);
            let display = path.display().to_string();
            let file = File::create(&path).map_err(|error| CliError::FileWrite {
                path: display.clone(),
                error,
            })?;
            write_json(BufWriter::new(file), &document)
                .map_err(|error| CliError::FileWrite { path: display.clone(), error })?;
            eprintln!(
                "{} {} sample for {} to {}",
                style("Wrote").cyan().bold(),
                format.description(),
                city.region_key(),
                display
            );
        }
        None => {
            write_json(io::stdout().lock(), &document).map_err(|error| CliError::FileWrite {
                path: "<stdout>".to_string(),
                error,
            })?;
        }
    }
    Ok(())
}

fn build_sample(format: FormatTag, city: SampleCity, tagged: bool) -> Value {
    let content = sample_document(format, city);
    if tagged {
        serde_json::json!(TaggedDocument::new(content, format))
    } else {
        content
    }
}

/// A directory output gets the conventional sample file name inside it.
fn output_path(output: &Path, format: FormatTag, city: SampleCity) -> PathBuf {
    if output.is_dir() {
        output.join(sample_file_name(format, city))
    } else {
        output.to_path_buf()
    }
}

fn write_json<W: Write>(mut writer: W, document: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, document)?;
    writeln!(writer)?;
    writer.flush()
}
