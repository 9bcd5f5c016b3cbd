//! Track document building and GPX serialization.
//!
//! The document layout is fixed: one metadata block, one track, one
//! segment, and one `trkpt` per sample in sample order. Only leaf values
//! (title, coordinates, elevation, labels, times) come from the activity;
//! they are escaped by the XML writer.

use chrono::{DateTime, FixedOffset};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use gpxport_activity_model::{ActivityInfo, StreamSet};
use gpxport_common::clock::format_track_time;
use gpxport_common::error::{GpxportError, GpxportResult};

use crate::timeline::Timeline;

/// Namespace attributes written on the `gpx` root, in output order.
///
/// The Garmin and ClueTrust extension namespaces are declared even though
/// no point uses them; downstream importers expect them.
pub const GPX_NAMESPACES: [(&str, &str); 5] = [
    ("xmlns", "http://www.topografix.com/GPX/1/1"),
    ("xmlns:gpxx", "http://www.garmin.com/xmlschemas/GpxExtensions/v3"),
    (
        "xmlns:gpxtpx",
        "http://www.garmin.com/xmlschemas/TrackPointExtension/v1",
    ),
    ("xmlns:gpxdata", "http://www.cluetrust.com/XML/GPXDATA/1/0"),
    ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
];

/// Value of the root `xsi:schemaLocation` attribute.
pub const GPX_SCHEMA_LOCATION: &str = "http://www.topografix.com/GPX/1/1 \
http://www.topografix.com/GPX/1/1/gpx.xsd \
http://www.garmin.com/xmlschemas/GpxExtensions/v3 \
http://www.garmin.com/xmlschemas/GpxExtensionsv3.xsd \
http://www.garmin.com/xmlschemas/TrackPointExtension/v1 \
http://www.garmin.com/xmlschemas/TrackPointExtensionv1.xsd";

const INDENT_WIDTH: usize = 2;

/// Human-readable point identifier: `TP` plus the index padded to five digits.
pub fn sequence_label(index: usize) -> String {
    format!("TP{index:05}")
}

/// One sample of the track, merged from all streams.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    pub index: usize,
    pub latitude: f64,
    pub longitude: f64,
    /// `None` when elevation is missing, undefined, or exactly zero.
    pub elevation: Option<f64>,
    pub timestamp: DateTime<FixedOffset>,
    pub sequence_label: String,
}

/// A single-track, single-segment GPX document.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackDocument {
    pub title: String,
    pub start_time: DateTime<FixedOffset>,
    pub points: Vec<TrackPoint>,
}

impl TrackDocument {
    /// Merge activity metadata, streams and reconstructed times.
    ///
    /// `timeline` must hold exactly one timestamp per coordinate.
    pub fn build(
        info: &ActivityInfo,
        streams: &StreamSet,
        timeline: &Timeline,
    ) -> GpxportResult<Self> {
        if timeline.len() != streams.sample_count() {
            return Err(GpxportError::processing(format!(
                "timeline has {} timestamps for {} samples",
                timeline.len(),
                streams.sample_count()
            )));
        }

        let points = streams
            .coordinates
            .iter()
            .zip(timeline.timestamps())
            .enumerate()
            .map(|(index, (coordinate, timestamp))| TrackPoint {
                index,
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
                // A recorded zero is treated like a missing value.
                elevation: streams.elevation_at(index).filter(|e| *e != 0.0),
                timestamp: *timestamp,
                sequence_label: sequence_label(index),
            })
            .collect();

        Ok(Self {
            title: info.title.clone(),
            start_time: timeline.start(),
            points,
        })
    }

    /// Serialize to GPX 1.1 markup with the given `creator` attribute.
    pub fn to_gpx(&self, creator: &str) -> GpxportResult<String> {
        let mut gpx = GpxWriter::new();

        gpx.declaration()?;

        let mut root = BytesStart::new("gpx");
        for attr in GPX_NAMESPACES {
            root.push_attribute(attr);
        }
        root.push_attribute(("xsi:schemaLocation", GPX_SCHEMA_LOCATION));
        root.push_attribute(("creator", creator));
        root.push_attribute(("version", "1.1"));
        gpx.open(root)?;

        gpx.open(BytesStart::new("metadata"))?;
        gpx.text_element("name", &self.title)?;
        gpx.open(BytesStart::new("author"))?;
        gpx.text_element("name", "")?;
        gpx.close("author")?;
        gpx.text_element("time", &format_track_time(&self.start_time))?;
        gpx.close("metadata")?;

        gpx.open(BytesStart::new("trk"))?;
        gpx.text_element("name", &self.title)?;
        gpx.open(BytesStart::new("trkseg"))?;
        for point in &self.points {
            gpx.track_point(point)?;
        }
        gpx.close("trkseg")?;
        gpx.close("trk")?;
        gpx.close("gpx")?;

        gpx.finish()
    }
}

/// Thin wrapper over the quick-xml writer that maps its errors.
struct GpxWriter {
    inner: Writer<Vec<u8>>,
}

impl GpxWriter {
    fn new() -> Self {
        Self {
            inner: Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH),
        }
    }

    fn write(&mut self, event: Event<'_>) -> GpxportResult<()> {
        self.inner
            .write_event(event)
            .map_err(|e| GpxportError::processing(format!("Failed to write GPX: {e}")))
    }

    fn declaration(&mut self) -> GpxportResult<()> {
        self.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("no"))))
    }

    fn open(&mut self, start: BytesStart<'_>) -> GpxportResult<()> {
        self.write(Event::Start(start))
    }

    fn close(&mut self, name: &str) -> GpxportResult<()> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// `<name>text</name>` on one line. Empty text still yields an open/close pair.
    fn text_element(&mut self, name: &str, text: &str) -> GpxportResult<()> {
        self.write(Event::Start(BytesStart::new(name)))?;
        self.write(Event::Text(BytesText::new(text)))?;
        self.close(name)
    }

    fn track_point(&mut self, point: &TrackPoint) -> GpxportResult<()> {
        let mut trkpt = BytesStart::new("trkpt");
        trkpt.push_attribute(("lat", format_decimal(point.latitude).as_str()));
        trkpt.push_attribute(("lon", format_decimal(point.longitude).as_str()));
        self.open(trkpt)?;

        if let Some(elevation) = point.elevation {
            self.text_element("ele", &format_decimal(elevation))?;
        }
        self.text_element("name", &point.sequence_label)?;
        self.text_element("time", &format_track_time(&point.timestamp))?;

        self.close("trkpt")
    }

    fn finish(self) -> GpxportResult<String> {
        let mut text = String::from_utf8(self.inner.into_inner())
            .map_err(|e| GpxportError::processing(format!("GPX output is not UTF-8: {e}")))?;
        text.push('\n');
        Ok(text)
    }
}

/// Shortest decimal text that reads back as `value`, never in exponent form.
///
/// Negative zero is written as `0`.
fn format_decimal(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
