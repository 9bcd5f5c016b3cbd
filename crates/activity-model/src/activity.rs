//! Activity metadata and the dump document produced by an activity source.

use serde::{Deserialize, Serialize};

use crate::stream::StreamSet;

/// Title and start time of a recorded activity, as shown by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityInfo {
    /// Activity name.
    pub title: String,

    /// Locale-formatted start time, e.g. `"09:30 AM on Monday, June 2, 2025"`.
    /// May contain line breaks from the page markup.
    #[serde(rename = "time", alias = "start_time")]
    pub start_time: String,
}

impl ActivityInfo {
    pub fn new(title: impl Into<String>, start_time: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            start_time: start_time.into(),
        }
    }

    /// Start time with line breaks and surrounding whitespace removed.
    pub fn normalized_start_time(&self) -> String {
        normalize_start_text(&self.start_time)
    }
}

/// Strip line breaks and surrounding whitespace from scraped start-time text.
pub fn normalize_start_text(text: &str) -> String {
    text.replace(['\n', '\r'], "").trim().to_string()
}

/// Everything an activity source returns for one activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDump {
    pub info: ActivityInfo,
    pub data: StreamSet,
}

impl ActivityDump {
    pub fn new(info: ActivityInfo, data: StreamSet) -> Self {
        Self { info, data }
    }

    /// Parse a dump from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the dump as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Overview of an activity dump, without converting it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySummary {
    pub title: String,
    pub start_time: String,
    pub samples: usize,
    pub elevation_samples: usize,
    pub relative_time_samples: usize,
}

impl ActivitySummary {
    pub fn of(dump: &ActivityDump) -> Self {
        Self {
            title: dump.info.title.clone(),
            start_time: dump.info.normalized_start_time(),
            samples: dump.data.sample_count(),
            elevation_samples: dump.data.defined_elevation_count(),
            relative_time_samples: dump.data.defined_relative_seconds_count(),
        }
    }

    /// Whether samples without a recorded time will be spaced one second apart.
    pub fn uses_estimated_times(&self) -> bool {
        self.relative_time_samples < self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::Coordinate;

    const DUMP: &str = r#"{
        "info": {
            "title": "Morning Run",
            "time": "\n09:30 AM on Monday, June 2, 2025\n"
        },
        "data": {
            "latlng": [[1.0, 2.0], [1.1, 2.1], [1.2, 2.2]],
            "altitude": [10, 0, 12],
            "time": [0, 5]
        }
    }"#;

    #[test]
    fn test_parse_dump() {
        let dump = ActivityDump::from_json(DUMP).unwrap();
        assert_eq!(dump.info.title, "Morning Run");
        assert!(dump.info.start_time.contains("June 2, 2025"));
        assert_eq!(dump.data.coordinates[2], Coordinate::new(1.2, 2.2));
    }

    #[test]
    fn test_normalized_start_time() {
        let info = ActivityInfo::new("x", "\r\n 09:30 AM on Monday,\n June 2, 2025 \n");
        assert_eq!(info.normalized_start_time(), "09:30 AM on Monday, June 2, 2025");
        assert_eq!(normalize_start_text("already clean"), "already clean");
    }

    #[test]
    fn test_start_time_alias() {
        let info: ActivityInfo =
            serde_json::from_str(r#"{"title":"x","start_time":"09:30 AM"}"#).unwrap();
        assert_eq!(info.start_time, "09:30 AM");
    }

    #[test]
    fn test_dump_json_roundtrip() {
        let dump = ActivityDump::from_json(DUMP).unwrap();
        let json = dump.to_json_pretty().unwrap();
        assert!(json.contains("\"time\""));
        assert_eq!(ActivityDump::from_json(&json).unwrap(), dump);
    }

    #[test]
    fn test_summary_counts_defined_samples() {
        let dump = ActivityDump::from_json(DUMP).unwrap();
        let summary = ActivitySummary::of(&dump);
        assert_eq!(summary.title, "Morning Run");
        assert_eq!(summary.start_time, "09:30 AM on Monday, June 2, 2025");
        assert_eq!(summary.samples, 3);
        // A zero elevation is still a recorded sample.
        assert_eq!(summary.elevation_samples, 3);
        assert_eq!(summary.relative_time_samples, 2);
        assert!(summary.uses_estimated_times());
    }
}
