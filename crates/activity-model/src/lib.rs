//! gpxport Activity Model
//!
//! Defines the data contracts exchanged with an activity source:
//! - **Activity:** Title and human-readable start time of a recording
//! - **Streams:** Parallel per-sample arrays (coordinates, elevation, relative time)
//! - **Dump:** The `{ info, data }` document an activity source produces
//!
//! The coordinate stream is the authority for the sample count. The
//! optional streams may be absent, shorter than the coordinates, or
//! contain `null` entries; every accessor reports those cases as `None`.

pub mod activity;
pub mod stream;

pub use activity::*;
pub use stream::*;
