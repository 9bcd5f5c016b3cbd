//! Timeline reconstruction.
//!
//! Turns the service's human-readable start time plus the optional
//! relative-seconds stream into one absolute timestamp per sample.
//!
//! Samples without a recorded relative time are placed `index` seconds
//! after the start. This spaces time-less activities one second apart and
//! fills the tail of a short time stream the same way.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};

use gpxport_activity_model::normalize_start_text;
use gpxport_common::clock::{format_track_time, ZoneSetting};
use gpxport_common::error::{GpxportError, GpxportResult};

/// chrono pattern for start times such as `09:30 AM on Monday, June 2, 2025`.
pub const START_TIME_PATTERN: &str = "%I:%M %p on %A, %B %d, %Y";

/// Parse the activity start time and anchor it in `zone`.
///
/// Fails with [`GpxportError::MalformedStartTime`] when the text does not
/// match [`START_TIME_PATTERN`] (including a weekday that contradicts the
/// date) or names a wall-clock time that does not exist in `zone`.
pub fn parse_start_time(text: &str, zone: &ZoneSetting) -> GpxportResult<DateTime<FixedOffset>> {
    let cleaned = normalize_start_text(text);
    let naive = NaiveDateTime::parse_from_str(&cleaned, START_TIME_PATTERN).map_err(|e| {
        tracing::debug!(text = %cleaned, error = %e, "Start time does not match pattern");
        GpxportError::malformed_start_time(text)
    })?;

    zone.resolve(&naive)
        .ok_or_else(|| GpxportError::malformed_start_time(text))
}

/// Where a sample's offset from the start came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleOffset {
    /// Taken from the relative-seconds stream.
    Recorded(f64),
    /// No recorded value; one second per sample index.
    Estimated(usize),
}

impl SampleOffset {
    /// Offset for sample `index`.
    pub fn for_index(index: usize, relative_seconds: Option<&[Option<f64>]>) -> Self {
        match relative_seconds.and_then(|stream| stream.get(index)).copied().flatten() {
            Some(recorded) => Self::Recorded(recorded),
            None => Self::Estimated(index),
        }
    }

    /// Whole seconds after the start. Fractions are truncated toward zero.
    pub fn whole_seconds(&self) -> i64 {
        match *self {
            Self::Recorded(secs) => secs.trunc() as i64,
            Self::Estimated(index) => index as i64,
        }
    }
}

/// Absolute timestamps for every sample of an activity.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    start: DateTime<FixedOffset>,
    timestamps: Vec<DateTime<FixedOffset>>,
}

impl Timeline {
    /// Parse `start_text` and reconstruct `sample_count` timestamps.
    pub fn reconstruct(
        start_text: &str,
        zone: &ZoneSetting,
        sample_count: usize,
        relative_seconds: Option<&[Option<f64>]>,
    ) -> GpxportResult<Self> {
        let start = parse_start_time(start_text, zone)?;
        Self::from_start(start, sample_count, relative_seconds)
    }

    /// Reconstruct timestamps from an already anchored start time.
    pub fn from_start(
        start: DateTime<FixedOffset>,
        sample_count: usize,
        relative_seconds: Option<&[Option<f64>]>,
    ) -> GpxportResult<Self> {
        let mut estimated = 0usize;
        let timestamps = (0..sample_count)
            .map(|index| {
                let offset = SampleOffset::for_index(index, relative_seconds);
                if matches!(offset, SampleOffset::Estimated(_)) {
                    estimated += 1;
                }
                TimeDelta::try_seconds(offset.whole_seconds())
                    .and_then(|delta| start.checked_add_signed(delta))
                    .ok_or(GpxportError::TimestampOutOfRange { index })
            })
            .collect::<GpxportResult<Vec<_>>>()?;

        if estimated > 0 {
            tracing::debug!(
                samples = sample_count,
                estimated,
                "Samples without recorded time spaced one second per index"
            );
        }

        Ok(Self { start, timestamps })
    }

    /// The anchored activity start.
    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    /// One timestamp per sample, in sample order.
    pub fn timestamps(&self) -> &[DateTime<FixedOffset>] {
        &self.timestamps
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Timestamps rendered in the track-document time format.
    pub fn rendered(&self) -> Vec<String> {
        self.timestamps.iter().map(format_track_time).collect()
    }
}
