//! Document sinks.

use std::io::Write;
use std::path::{Path, PathBuf};

use gpxport_common::error::{GpxportError, GpxportResult};

/// Output target that selects standard output instead of a file.
pub const STDOUT_TARGET: &str = "-";

/// Persists a finished document.
pub trait DocumentSink {
    /// Human-readable destination, used in logs and errors.
    fn describe(&self) -> String;

    /// Write the complete document in one call.
    ///
    /// Any failure is reported as [`GpxportError::SinkFailure`].
    fn write(&mut self, document: &str) -> GpxportResult<()>;
}

/// Writes the document to a file, creating parent directories first.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the output file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn failure(&self, e: std::io::Error) -> GpxportError {
        GpxportError::sink_failure(self.describe(), e.to_string())
    }
}

impl DocumentSink for FileSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&mut self, document: &str) -> GpxportResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.failure(e))?;
        }
        std::fs::write(&self.path, document).map_err(|e| self.failure(e))?;

        tracing::info!(
            path = %self.path.display(),
            bytes = document.len(),
            "Wrote track document"
        );
        Ok(())
    }
}

/// Writes the document to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DocumentSink for StdoutSink {
    fn describe(&self) -> String {
        "stdout".to_string()
    }

    fn write(&mut self, document: &str) -> GpxportResult<()> {
        let mut out = std::io::stdout().lock();
        out.write_all(document.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| GpxportError::sink_failure(self.describe(), e.to_string()))
    }
}

/// Pick the sink for an output target: `-` is stdout, anything else a file.
pub fn sink_for_target(target: &Path) -> Box<dyn DocumentSink> {
    if target.as_os_str() == STDOUT_TARGET {
        Box::new(StdoutSink)
    } else {
        Box::new(FileSink::new(target))
    }
}
