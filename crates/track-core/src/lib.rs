//! gpxport Track Core
//!
//! Converts an activity dump into a GPX track document:
//! - **Timeline:** Rebuild absolute per-sample times from the start text
//!   and the relative-seconds stream
//! - **Document:** Merge coordinates, elevation and times into track
//!   points and render the GPX markup
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod document;
pub mod timeline;

pub use document::{sequence_label, TrackDocument, TrackPoint};
pub use timeline::{parse_start_time, SampleOffset, Timeline};

use gpxport_activity_model::ActivityDump;
use gpxport_common::clock::ZoneSetting;
use gpxport_common::config::DEFAULT_CREATOR;
use gpxport_common::error::GpxportResult;

/// Settings that shape a conversion but are not part of the activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOptions {
    /// Zone anchoring the naive start time.
    pub zone: ZoneSetting,
    /// Root `creator` attribute.
    pub creator: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            zone: ZoneSetting::Local,
            creator: DEFAULT_CREATOR.to_string(),
        }
    }
}

/// Build the track document for an activity.
pub fn build_document(
    dump: &ActivityDump,
    options: &ConversionOptions,
) -> GpxportResult<TrackDocument> {
    let timeline = Timeline::reconstruct(
        &dump.info.start_time,
        &options.zone,
        dump.data.sample_count(),
        dump.data.relative_seconds.as_deref(),
    )?;
    TrackDocument::build(&dump.info, &dump.data, &timeline)
}

/// Convert an activity into GPX markup.
///
/// Any failure aborts the whole conversion; no partial document is returned.
pub fn convert(dump: &ActivityDump, options: &ConversionOptions) -> GpxportResult<String> {
    let document = build_document(dump, options)?;
    let gpx = document.to_gpx(&options.creator)?;

    tracing::info!(
        title = %document.title,
        points = document.points.len(),
        bytes = gpx.len(),
        "Converted activity to GPX"
    );

    Ok(gpx)
}
