//! Subcommand implementations.

pub mod config;
pub mod convert;
pub mod info;

use gpxport_common::clock::ZoneSetting;
use gpxport_common::config::AppConfig;
use gpxport_common::error::GpxportError;

/// Activity reference from the command line, falling back to configuration.
fn resolve_reference(
    reference: Option<String>,
    config: &AppConfig,
) -> Result<String, GpxportError> {
    reference
        .or_else(|| config.activity.clone())
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| {
            GpxportError::config(
                "No activity given. Pass a dump path or set GPXPORT_ACTIVITY.",
            )
        })
}

/// Time zone from the command line, falling back to configuration.
fn resolve_zone(timezone: Option<&str>, config: &AppConfig) -> Result<ZoneSetting, GpxportError> {
    match timezone {
        Some(tz) => tz.parse(),
        None => config.zone(),
    }
}
