use std::{
	io::{self, BufRead, Write},
	path::{Path, PathBuf},
	process::ExitCode,
};

use anyhow::Result;
use gt_media_metadata::{DeviceInfo, ExifRecord, GpsRecord, MediaLocation};
use tracing::{debug, warn};

use crate::{
	context::{Context, OutputFormat},
	report::{GpsReport, Report, BANNER, PROMPT},
};

/// How a run ended, which decides the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectStatus {
	Reported,
	/// The image was read but had no EXIF data. Not an error.
	NoMetadata,
	NotFound,
}

impl InspectStatus {
	pub const fn code(self) -> u8 {
		match self {
			Self::Reported | Self::NoMetadata => 0,
			Self::NotFound => 1,
		}
	}
}

impl From<InspectStatus> for ExitCode {
	fn from(status: InspectStatus) -> Self {
		Self::from(status.code())
	}
}

/// Strips the whitespace and quotes a pasted or drag-and-dropped path tends to carry.
pub fn clean_path(raw: &str) -> &str {
	raw.trim().trim_matches(|c| c == '"' || c == '\'')
}

pub struct Inspector<'a, R, W> {
	ctx: &'a Context,
	input: R,
	out: W,
}

impl<'a, R: BufRead, W: Write> Inspector<'a, R, W> {
	pub fn new(ctx: &'a Context, input: R, out: W) -> Self {
		Self { ctx, input, out }
	}

	/// Inspects `path`, or the path typed at the prompt when there is none, and prints the report.
	pub fn run(&mut self, path: Option<PathBuf>) -> Result<InspectStatus> {
		if self.ctx.is_human() {
			writeln!(self.out, "{BANNER}")?;
			writeln!(self.out, "{}", "-".repeat(35))?;
		}

		let path = match path {
			Some(path) => path,
			None => PathBuf::from(self.prompt()?),
		};

		let report = self.inspect(&path);

		match self.ctx.format {
			OutputFormat::Human => report.write_human(&mut self.out)?,
			OutputFormat::Json => report.write_json(&mut self.out)?,
		}
		self.out.flush()?;

		Ok(report.status())
	}

	fn prompt(&mut self) -> Result<String> {
		if self.ctx.is_human() {
			write!(self.out, "{PROMPT}")?;
			self.out.flush()?;
		} else {
			// keep stdout a single JSON document
			let mut err = io::stderr().lock();
			write!(err, "{PROMPT}")?;
			err.flush()?;
		}

		let mut line = String::new();
		self.input.read_line(&mut line)?;

		Ok(clean_path(&line).to_string())
	}

	fn inspect(&self, path: &Path) -> Report {
		let shown = path.display().to_string();

		if !path.exists() {
			warn!(path = %shown, "image path does not exist");
			return Report::NotFound { path: shown };
		}

		match ExifRecord::from_path(path) {
			Ok(Some(record)) => self.describe(shown, record),
			Ok(None) => {
				debug!(path = %shown, "image has no exif data");
				Report::NoMetadata {
					path: shown,
					error: None,
				}
			}
			Err(e) => {
				warn!(path = %shown, %e, "failed to read exif data");
				Report::NoMetadata {
					path: shown,
					error: Some(e.to_string()),
				}
			}
		}
	}

	fn describe(&self, path: String, record: ExifRecord) -> Report {
		let device = DeviceInfo::from_record(&record);

		let gps = match GpsRecord::from_record(&record) {
			None => GpsReport::Absent,
			Some(gps) => match MediaLocation::from_gps(&gps) {
				Ok(location) => GpsReport::Located {
					maps_url: location.maps_url(),
					location,
				},
				Err(e) => {
					warn!(%path, %e, "failed to decode gps data");
					GpsReport::Malformed {
						error: e.to_string(),
					}
				}
			},
		};

		Report::Metadata {
			path,
			device,
			gps,
			tags: self.ctx.show_all.then_some(record),
		}
	}
}
