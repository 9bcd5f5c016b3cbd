//! Show activity information.

use gpxport_activity_io::{ActivitySource, DumpFileSource};
use gpxport_activity_model::ActivitySummary;
use gpxport_common::clock::format_track_time;
use gpxport_common::config::AppConfig;
use gpxport_track_core::parse_start_time;

pub fn run(
    config: AppConfig,
    reference: Option<String>,
    timezone: Option<String>,
) -> anyhow::Result<()> {
    let reference = super::resolve_reference(reference, &config)?;
    let zone = super::resolve_zone(timezone.as_deref(), &config)?;

    let dump = DumpFileSource::new().fetch_activity(&reference)?;
    let summary = ActivitySummary::of(&dump);

    println!("Activity: {}", summary.title);
    println!("  Start: {}", summary.start_time);
    match parse_start_time(&dump.info.start_time, &zone) {
        Ok(start) => println!("  Start ({zone}): {}", format_track_time(&start)),
        Err(e) => println!("  Start ({zone}): unparseable ({e})"),
    }
    println!();

    println!("Streams:");
    println!("  Samples: {}", summary.samples);
    println!(
        "  Elevation: {}/{} samples",
        summary.elevation_samples, summary.samples
    );
    println!(
        "  Relative time: {}/{} samples",
        summary.relative_time_samples, summary.samples
    );
    if summary.uses_estimated_times() {
        println!("  Samples without recorded time are spaced one second per index.");
    }

    Ok(())
}
