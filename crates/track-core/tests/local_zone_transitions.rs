//! Start times around DST transitions in the machine's local zone.
//!
//! Kept in its own test binary: it pins `TZ` for the whole process.

use gpxport_common::clock::{format_track_time, ZoneSetting};
use gpxport_common::error::GpxportError;
use gpxport_track_core::parse_start_time;

#[test]
fn local_zone_resolves_dst_fold_and_rejects_gap() {
    std::env::set_var("TZ", "Europe/Paris");

    // 02:30 happens twice on the autumn change; the summer-time reading comes first.
    let start = parse_start_time("02:30 AM on Sunday, October 26, 2025", &ZoneSetting::Local)
        .unwrap();
    assert_eq!(format_track_time(&start), "2025-10-26T02:30:00+02:00");
    assert_eq!(start.timestamp(), 1_761_438_600);

    // Outside a transition the offset is unambiguous.
    let start = parse_start_time("10:00 AM on Monday, June 2, 2025", &ZoneSetting::Local)
        .unwrap();
    assert_eq!(format_track_time(&start), "2025-06-02T10:00:00+02:00");

    // 02:30 never happens on the spring change.
    let result = parse_start_time("02:30 AM on Sunday, March 30, 2025", &ZoneSetting::Local);
    assert!(matches!(
        result,
        Err(GpxportError::MalformedStartTime { .. })
    ));
}
