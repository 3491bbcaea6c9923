//! `geotrail list-regions`: print the configured region table.

use super::common::Context;
use crate::error::CliError;

/// Run the list-regions command.
pub fn run(ctx: &Context) -> Result<(), CliError> {
    let pipeline = ctx.pipeline()?;

    println!("{:<12} {:<20} {:<44} VIEW", "KEY", "REGION", "BOUNDS");
    for region in pipeline.regions().iter() {
        println!(
            "{:<12} {:<20} {:<44} {:.4}, {:.4} @ {}",
            region.key,
            region.display_name,
            region.bounds.to_string(),
            region.center.lat,
            region.center.lng,
            region.zoom
        );
    }

    if !ctx.config.regions.is_empty() {
        println!();
        println!(
            "{} region(s) defined in {}",
            ctx.config.regions.len(),
            ctx.config_path.display()
        );
    }
    Ok(())
}
