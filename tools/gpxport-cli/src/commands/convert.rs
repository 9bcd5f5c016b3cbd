//! Convert an activity dump to a GPX document.

use std::path::PathBuf;

use gpxport_activity_io::{sink_for_target, ActivitySource, DumpFileSource};
use gpxport_common::config::AppConfig;
use gpxport_track_core::{convert, ConversionOptions};

pub fn run(
    config: AppConfig,
    reference: Option<String>,
    output: Option<PathBuf>,
    timezone: Option<String>,
    creator: Option<String>,
) -> anyhow::Result<()> {
    let reference = super::resolve_reference(reference, &config)?;
    let options = ConversionOptions {
        zone: super::resolve_zone(timezone.as_deref(), &config)?,
        creator: creator.unwrap_or(config.creator),
    };
    let output = output.unwrap_or(config.output);

    let source = DumpFileSource::new();
    tracing::info!(source = source.name(), reference = %reference, "Fetching activity");
    let dump = source.fetch_activity(&reference)?;

    tracing::info!(zone = %options.zone, "Converting activity");
    let gpx = convert(&dump, &options)?;

    let mut sink = sink_for_target(&output);
    sink.write(&gpx)?;

    tracing::info!(output = %sink.describe(), "Ok.");
    Ok(())
}
