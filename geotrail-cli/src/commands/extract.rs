//! `geotrail extract`: write the point layer of one region as GeoJSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use console::style;
use geotrail::region::WORLD_KEY;

use super::common::{load_and_report, Context, DocumentArgs};
use crate::error::CliError;

/// Arguments for the extract command.
#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Region key to filter to (see `geotrail list-regions`)
    #[arg(long, default_value = WORLD_KEY)]
    pub region: String,

    /// Output file for the GeoJSON point layer (stdout if omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Run the extract command.
pub fn run(args: ExtractArgs, ctx: &Context) -> Result<(), CliError> {
    let document = load_and_report(&args.document)?;
    let analysis = ctx
        .pipeline()?
        .run(&document.content, document.format, &args.region)?;

    eprintln!("{} {}", style("✓").green(), analysis.report.message);
    if analysis.is_region_empty() {
        eprintln!("{} {}", style("!").yellow(), analysis.summary());
    } else {
        eprintln!("{} {}", style("→").cyan(), analysis.summary());
    }

    let layer = analysis.layer();
    eprintln!(
        "  view: {:.4}, {:.4} @ zoom {}",
        layer.viewport.center[1], layer.viewport.center[0], layer.viewport.zoom
    );

    match &args.output {
        Some(path) => {
            let display = path.display().to_string();
            let file = File::create(path).map_err(|error| CliError::FileWrite {
                path: display.clone(),
                error,
            })?;
            write_geojson(BufWriter::new(file), &layer)
                .map_err(|error| CliError::FileWrite { path: display.clone(), error })?;
            eprintln!("{} {}", style("Wrote").cyan().bold(), display);
        }
        None => {
            write_geojson(io::stdout().lock(), &layer).map_err(|error| CliError::FileWrite {
                path: "<stdout>".to_string(),
                error,
            })?;
        }
    }
    Ok(())
}

fn write_geojson<W: Write>(mut writer: W, layer: &geotrail::layer::PointLayer) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, layer.to_feature_collection())?;
    writeln!(writer)?;
    writer.flush()
}
