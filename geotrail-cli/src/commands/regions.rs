//! `geotrail regions`: show which regions contain points from a file.

use console::style;
use geotrail::{classify, Extractor};

use super::common::{load_and_report, Context, DocumentArgs};
use crate::error::CliError;

/// Run the regions command.
pub fn run(args: DocumentArgs, ctx: &Context) -> Result<(), CliError> {
    let document = load_and_report(&args)?;
    let pipeline = ctx.pipeline()?;

    let report = pipeline.validate(&document.content, document.format);
    if !report.accepted {
        return Err(CliError::Rejected(report));
    }

    let points = Extractor::new(ctx.config.legacy.e7_scaling)
        .extract(&document.content, document.format);
    let availability = classify(&points, pipeline.regions());

    println!("{}", report.message);
    println!();
    println!("{:<12} {:<20} POINTS", "KEY", "REGION");
    for region in pipeline.regions().iter() {
        let marker = if availability.is_available(&region.key) {
            style("yes").green()
        } else {
            style("no").dim()
        };
        println!("{:<12} {:<20} {}", region.key, region.display_name, marker);
    }
    println!();
    println!(
        "{} of {} regions have data ({} points total)",
        availability.available_keys().count(),
        availability.len(),
        points.len()
    );
    Ok(())
}
