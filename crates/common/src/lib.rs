//! gpxport Common Utilities
//!
//! Shared infrastructure for all gpxport crates:
//! - Error types and result aliases
//! - Time-zone handling and track time formatting
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
