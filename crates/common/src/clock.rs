//! Clock and time-zone utilities for activity timelines.
//!
//! Activity start times arrive as wall-clock text without any zone
//! information. This module provides utilities for:
//! - Choosing the zone that anchors that wall-clock time
//! - Resolving a naive date-time to a fixed-offset instant
//! - Rendering instants in the track-document time format

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};

use crate::error::{GpxportError, GpxportResult};

/// Format used for every timestamp written to a track document.
pub const TRACK_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Zone in which naive activity start times are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneSetting {
    /// The zone of the machine running the conversion.
    #[default]
    Local,
    /// A fixed UTC offset.
    Fixed(FixedOffset),
}

impl ZoneSetting {
    /// UTC as a fixed zone.
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Anchor a naive wall-clock time in this zone.
    ///
    /// Ambiguous local times (DST fold) resolve to the earlier instant.
    /// Returns `None` for wall-clock times skipped by a DST transition.
    pub fn resolve(&self, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            // chrono does not order the two candidates of a fold, so compare instants.
            Self::Local => match Local.from_local_datetime(naive) {
                LocalResult::Single(dt) => Some(dt.fixed_offset()),
                LocalResult::Ambiguous(a, b) => Some(a.min(b).fixed_offset()),
                LocalResult::None => None,
            },
            Self::Fixed(offset) => offset.from_local_datetime(naive).earliest(),
        }
    }
}

impl FromStr for ZoneSetting {
    type Err = GpxportError;

    /// Accepts `local`, `utc`/`z`, or a numeric offset (`+02:00`, `-0530`, `+01`).
    fn from_str(s: &str) -> GpxportResult<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Ok(Self::Local),
            "utc" | "z" => return Ok(Self::utc()),
            _ => {}
        }

        parse_offset(trimmed)
            .map(Self::Fixed)
            .ok_or_else(|| GpxportError::config(format!("Invalid time zone: {s:?}")))
    }
}

impl fmt::Display for ZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (
            digits[..2].parse::<i32>().ok()?,
            digits[2..].parse::<i32>().ok()?,
        ),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Render an instant in the track-document time format.
pub fn format_track_time(time: &DateTime<FixedOffset>) -> String {
    time.format(TRACK_TIME_FORMAT).to_string()
}
