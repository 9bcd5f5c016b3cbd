//! gpxport Activity I/O
//!
//! The two blocking calls that bracket a conversion:
//! - **Sources** fetch an activity dump for a reference
//! - **Sinks** persist the finished document in one write
//!
//! Every failure here is fatal to the conversion; nothing is retried.

pub mod sink;
pub mod source;

pub use sink::{sink_for_target, DocumentSink, FileSink, StdoutSink};
pub use source::{ActivitySource, DumpFileSource};
