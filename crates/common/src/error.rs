//! Error types shared across gpxport crates.
//!
//! Every variant is fatal: a conversion either produces a complete
//! document or fails as a whole.

/// Top-level error type for gpxport operations.
#[derive(Debug, thiserror::Error)]
pub enum GpxportError {
    #[error("Activity source unavailable ({reference}): {message}")]
    SourceUnavailable { reference: String, message: String },

    #[error("Malformed activity start time: {text:?}")]
    MalformedStartTime { text: String },

    #[error("Failed to write document to {target}: {message}")]
    SinkFailure { target: String, message: String },

    #[error("Timestamp for sample {index} is out of range")]
    TimestampOutOfRange { index: usize },

    #[error("Processing error: {message}")]
    Processing { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using GpxportError.
pub type GpxportResult<T> = Result<T, GpxportError>;

impl GpxportError {
    pub fn source_unavailable(reference: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            reference: reference.into(),
            message: msg.into(),
        }
    }

    pub fn malformed_start_time(text: impl Into<String>) -> Self {
        Self::MalformedStartTime { text: text.into() }
    }

    pub fn sink_failure(target: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::SinkFailure {
            target: target.into(),
            message: msg.into(),
        }
    }

    pub fn processing(msg: impl Into<String>) -> Self {
        Self::Processing {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failing_input() {
        let err = GpxportError::malformed_start_time("yesterday");
        assert_eq!(
            err.to_string(),
            "Malformed activity start time: \"yesterday\""
        );

        let err = GpxportError::source_unavailable("data.json", "No such file");
        assert_eq!(
            err.to_string(),
            "Activity source unavailable (data.json): No such file"
        );

        let err = GpxportError::sink_failure("export.gpx", "disk full");
        assert!(err.to_string().contains("export.gpx"));
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> GpxportResult<()> {
            Err::<(), _>(std::io::Error::other("boom"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(GpxportError::Io(_))));
    }
}
