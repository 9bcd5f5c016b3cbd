//! Parallel sample streams recorded for an activity.
//!
//! Wire names follow the activity service's stream endpoint: `latlng`,
//! `altitude` and `time`. Streams the converter does not use (`cadence`,
//! `watts`, `temp`, `moving`, ...) are ignored on input.

use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
///
/// Values are carried as recorded; no range validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.latitude, c.longitude]
    }
}

/// An optional per-sample stream. `null` entries are undefined samples.
pub type OptionalStream = Option<Vec<Option<f64>>>;

/// Parallel arrays indexed by sample position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StreamSet {
    /// Sample positions. Defines the sample count.
    #[serde(rename = "latlng")]
    pub coordinates: Vec<Coordinate>,

    /// Elevation in meters.
    #[serde(rename = "altitude", default, skip_serializing_if = "Option::is_none")]
    pub elevation: OptionalStream,

    /// Seconds elapsed since the activity start.
    #[serde(rename = "time", default, skip_serializing_if = "Option::is_none")]
    pub relative_seconds: OptionalStream,
}

impl StreamSet {
    /// Create a stream set holding only coordinates.
    pub fn from_coordinates(coordinates: impl IntoIterator<Item = Coordinate>) -> Self {
        Self {
            coordinates: coordinates.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Attach an elevation stream.
    pub fn with_elevation(mut self, elevation: impl IntoIterator<Item = Option<f64>>) -> Self {
        self.elevation = Some(elevation.into_iter().collect());
        self
    }

    /// Attach a relative-seconds stream.
    pub fn with_relative_seconds(
        mut self,
        seconds: impl IntoIterator<Item = Option<f64>>,
    ) -> Self {
        self.relative_seconds = Some(seconds.into_iter().collect());
        self
    }

    /// Number of samples, as defined by the coordinate stream.
    pub fn sample_count(&self) -> usize {
        self.coordinates.len()
    }

    /// Elevation recorded for sample `index`, if present and defined.
    pub fn elevation_at(&self, index: usize) -> Option<f64> {
        sample_at(&self.elevation, index)
    }

    /// Relative seconds recorded for sample `index`, if present and defined.
    pub fn relative_seconds_at(&self, index: usize) -> Option<f64> {
        sample_at(&self.relative_seconds, index)
    }

    /// Number of samples in `0..sample_count()` with a defined elevation.
    pub fn defined_elevation_count(&self) -> usize {
        (0..self.sample_count())
            .filter(|&i| self.elevation_at(i).is_some())
            .count()
    }

    /// Number of samples in `0..sample_count()` with a defined relative time.
    pub fn defined_relative_seconds_count(&self) -> usize {
        (0..self.sample_count())
            .filter(|&i| self.relative_seconds_at(i).is_some())
            .count()
    }
}

fn sample_at(stream: &OptionalStream, index: usize) -> Option<f64> {
    stream.as_ref()?.get(index).copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_service_stream_names() {
        let raw = r#"{
            "latlng": [[48.1, 11.5], [48.2, 11.6]],
            "altitude": [520.5, 521.0],
            "time": [0, 4]
        }"#;
        let streams: StreamSet = serde_json::from_str(raw).unwrap();
        assert_eq!(streams.sample_count(), 2);
        assert_eq!(streams.coordinates[1], Coordinate::new(48.2, 11.6));
        assert_eq!(streams.elevation_at(0), Some(520.5));
        assert_eq!(streams.relative_seconds_at(1), Some(4.0));
    }

    #[test]
    fn test_missing_optional_streams_are_absent() {
        let streams: StreamSet = serde_json::from_str(r#"{"latlng": [[1.0, 2.0]]}"#).unwrap();
        assert_eq!(streams.elevation, None);
        assert_eq!(streams.relative_seconds, None);
        assert_eq!(streams.elevation_at(0), None);
        assert_eq!(streams.relative_seconds_at(0), None);
    }

    #[test]
    fn test_short_streams_and_nulls_read_as_undefined() {
        let raw = r#"{
            "latlng": [[1.0, 2.0], [1.1, 2.1], [1.2, 2.2]],
            "altitude": [10.0, null],
            "time": [0]
        }"#;
        let streams: StreamSet = serde_json::from_str(raw).unwrap();
        assert_eq!(streams.elevation_at(0), Some(10.0));
        assert_eq!(streams.elevation_at(1), None);
        assert_eq!(streams.elevation_at(2), None);
        assert_eq!(streams.relative_seconds_at(1), None);
        assert_eq!(streams.defined_elevation_count(), 1);
        assert_eq!(streams.defined_relative_seconds_count(), 1);
    }

    #[test]
    fn test_unused_streams_are_ignored() {
        let raw = r#"{
            "latlng": [[1.0, 2.0]],
            "cadence": [80],
            "watts": [210],
            "temp": [21],
            "moving": [true]
        }"#;
        let streams: StreamSet = serde_json::from_str(raw).unwrap();
        assert_eq!(streams.sample_count(), 1);
    }

    #[test]
    fn test_coordinates_are_required() {
        let result = serde_json::from_str::<StreamSet>(r#"{"altitude": [1.0]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_longer_optional_stream_does_not_extend_count() {
        let streams = StreamSet::from_coordinates([Coordinate::new(0.0, 0.0)])
            .with_elevation([Some(1.0), Some(2.0), Some(3.0)]);
        assert_eq!(streams.sample_count(), 1);
        assert_eq!(streams.defined_elevation_count(), 1);
    }

    #[test]
    fn test_serializes_coordinates_as_pairs() {
        let streams = StreamSet::from_coordinates([Coordinate::new(1.5, -2.25)]);
        let json = serde_json::to_string(&streams).unwrap();
        assert_eq!(json, r#"{"latlng":[[1.5,-2.25]]}"#);
    }
}
