use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("there was an i/o error {0} at {}", .1.display())]
	Io(std::io::Error, Box<Path>),
	#[error("error from the exif crate: {0}")]
	Exif(#[from] exif::Error),
	#[error("the gps record has no `{0}` tag")]
	MissingGpsTag(&'static str),
	#[error("expected {expected} coordinate components (degrees, minutes, seconds), found {found}")]
	CoordinateArity { expected: usize, found: usize },
	#[error("a coordinate must hold numeric components, found {0}")]
	NonNumericCoordinate(&'static str),
	#[error("a coordinate component has a zero denominator")]
	ZeroDenominator,
}

pub type Result<T> = std::result::Result<T, Error>;
