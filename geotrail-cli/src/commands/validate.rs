//! `geotrail validate`: sample-check a file against its declared format.

use console::style;

use super::common::{load_and_report, Context, DocumentArgs};
use crate::error::CliError;

/// Run the validate command.
pub fn run(args: DocumentArgs, ctx: &Context) -> Result<(), CliError> {
    let document = load_and_report(&args)?;
    let report = ctx.pipeline()?.validate(&document.content, document.format);

    if !report.accepted {
        return Err(CliError::Rejected(report));
    }

    println!("{} {}", style("✓").green(), report.message);
    if report.unparseable_fields > 0 {
        println!(
            "  {} {} coordinate fields in the sample could not be parsed",
            style("!").yellow(),
            report.unparseable_fields
        );
    }
    Ok(())
}
