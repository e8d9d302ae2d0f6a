use std::io::{self, Write};

use gt_media_metadata::{exif::GPS_INFO_KEY, DeviceInfo, ExifRecord, GpsRecord, MediaLocation};
use serde::Serialize;

use crate::inspect::InspectStatus;

pub const BANNER: &str = "Exif Metadata Extraction Tool v1.0";
pub const PROMPT: &str = "Enter image path: ";

/// Everything we learnt about one image, ready to be printed in either output format.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
	NotFound {
		path: String,
	},
	NoMetadata {
		path: String,
		#[serde(skip_serializing_if = "Option::is_none")]
		error: Option<String>,
	},
	Metadata {
		path: String,
		device: DeviceInfo,
		gps: GpsReport,
		#[serde(skip_serializing_if = "Option::is_none")]
		tags: Option<ExifRecord>,
	},
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GpsReport {
	Located {
		location: MediaLocation,
		maps_url: String,
	},
	Absent,
	Malformed {
		error: String,
	},
}

impl Report {
	pub const fn status(&self) -> InspectStatus {
		match self {
			Self::NotFound { .. } => InspectStatus::NotFound,
			Self::NoMetadata { .. } => InspectStatus::NoMetadata,
			Self::Metadata { .. } => InspectStatus::Reported,
		}
	}

	pub fn write_json(&self, out: &mut impl Write) -> anyhow::Result<()> {
		serde_json::to_writer_pretty(&mut *out, self)?;
		writeln!(out)?;
		Ok(())
	}

	pub fn write_human(&self, out: &mut impl Write) -> io::Result<()> {
		match self {
			Self::NotFound { path } => writeln!(out, "Error: File '{path}' not found."),
			Self::NoMetadata { path, error } => {
				writeln!(out, "\nAnalyzing '{path}'...\n")?;
				if let Some(error) = error {
					writeln!(out, "Error processing image: {error}")?;
				}
				writeln!(out, "No Exif metadata found in this image.")
			}
			Self::Metadata {
				path,
				device,
				gps,
				tags,
			} => {
				writeln!(out, "\nAnalyzing '{path}'...\n")?;

				writeln!(out, "--- Device Information ---")?;
				for (label, value) in device.fields() {
					writeln!(out, "{label:<9}: {value}")?;
				}

				writeln!(out, "\n--- GPS Coordinates ---")?;
				gps.write_human(out)?;

				if let Some(tags) = tags {
					writeln!(out, "\n--- All Tags ---")?;
					write_tags(out, tags)?;
				}

				Ok(())
			}
		}
	}
}

impl GpsReport {
	fn write_human(&self, out: &mut impl Write) -> io::Result<()> {
		match self {
			Self::Located { location, maps_url } => {
				writeln!(out, "Latitude : {}", location.latitude())?;
				writeln!(out, "Longitude: {}", location.longitude())?;
				writeln!(out, "Maps URL : {maps_url}")
			}
			Self::Absent => writeln!(out, "No GPS data available."),
			Self::Malformed { error } => {
				writeln!(out, "Error decoding GPS data: {error}")?;
				writeln!(out, "No GPS data available.")
			}
		}
	}
}

fn write_tags(out: &mut impl Write, record: &ExifRecord) -> io::Result<()> {
	for (name, value) in record.iter() {
		if name != GPS_INFO_KEY {
			writeln!(out, "{name}: {value}")?;
			continue;
		}

		writeln!(out, "{name}:")?;
		if let Some(gps) = GpsRecord::from_record(record) {
			for (name, value) in gps.iter() {
				writeln!(out, "  {name}: {value}")?;
			}
		}
	}

	Ok(())
}
