//! Activity sources.

use std::io::Read;
use std::path::Path;

use gpxport_activity_model::ActivityDump;
use gpxport_common::error::{GpxportError, GpxportResult};

/// Reference that selects standard input instead of a file.
pub const STDIN_REFERENCE: &str = "-";

/// Produces the raw activity for a reference.
pub trait ActivitySource {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch the activity identified by `reference`.
    ///
    /// Any failure is reported as [`GpxportError::SourceUnavailable`].
    fn fetch_activity(&self, reference: &str) -> GpxportResult<ActivityDump>;
}

/// Reads a saved `{ "info": ..., "data": ... }` activity dump from disk,
/// or from standard input when the reference is `-`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DumpFileSource;

impl DumpFileSource {
    pub fn new() -> Self {
        Self
    }

    /// Decode a dump from any reader. `reference` only labels errors.
    pub fn read_from(mut reader: impl Read, reference: &str) -> GpxportResult<ActivityDump> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| GpxportError::source_unavailable(reference, e.to_string()))?;
        Self::decode(&content, reference)
    }

    fn decode(content: &str, reference: &str) -> GpxportResult<ActivityDump> {
        ActivityDump::from_json(content).map_err(|e| {
            GpxportError::source_unavailable(reference, format!("Invalid activity dump: {e}"))
        })
    }
}

impl ActivitySource for DumpFileSource {
    fn name(&self) -> &'static str {
        "dump-file"
    }

    fn fetch_activity(&self, reference: &str) -> GpxportResult<ActivityDump> {
        if reference == STDIN_REFERENCE {
            tracing::info!("Reading activity dump from stdin");
            return Self::read_from(std::io::stdin().lock(), reference);
        }

        let path = Path::new(reference);
        tracing::info!(path = %path.display(), "Reading activity dump");
        let content = std::fs::read_to_string(path)
            .map_err(|e| GpxportError::source_unavailable(reference, e.to_string()))?;
        let dump = Self::decode(&content, reference)?;

        tracing::debug!(
            title = %dump.info.title,
            samples = dump.data.sample_count(),
            "Loaded activity dump"
        );
        Ok(dump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"{
        "info": {"title": "Hill Repeats", "time": "06:45 AM on Tuesday, June 3, 2025"},
        "data": {"latlng": [[1.0, 2.0], [1.5, 2.5]], "time": [0, 2]}
    }"#;

    #[test]
    fn test_fetch_from_file() {
        let dir = std::env::temp_dir().join("gpxport_test_dump_source");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join("data.json");
        std::fs::write(&path, DUMP).unwrap();

        let source = DumpFileSource::new();
        let dump = source.fetch_activity(path.to_str().unwrap()).unwrap();
        assert_eq!(dump.info.title, "Hill Repeats");
        assert_eq!(dump.data.sample_count(), 2);
        assert_eq!(dump.data.elevation, None);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let source = DumpFileSource::new();
        let err = source
            .fetch_activity("/nonexistent/gpxport/data.json")
            .unwrap_err();
        match err {
            GpxportError::SourceUnavailable { reference, .. } => {
                assert_eq!(reference, "/nonexistent/gpxport/data.json");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_undecodable_dump_is_source_unavailable() {
        let err = DumpFileSource::read_from(r#"{"info": {}}"#.as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, GpxportError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("Invalid activity dump"));
    }

    #[test]
    fn test_read_from_reader() {
        let dump = DumpFileSource::read_from(DUMP.as_bytes(), "inline").unwrap();
        assert_eq!(dump.data.relative_seconds_at(1), Some(2.0));
    }
}
