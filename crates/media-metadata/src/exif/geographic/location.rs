use std::fmt::Display;

use crate::{
	exif::consts::{
		GPS_LATITUDE, GPS_LATITUDE_REF, GPS_LONGITUDE, GPS_LONGITUDE_REF, MAPS_URL_BASE,
	},
	Error, GpsRecord, Result,
};

use super::{dms_to_decimal, Axis};

#[derive(Default, Clone, Copy, PartialEq, Debug, serde::Serialize)]
pub struct MediaLocation {
	latitude: f64,
	longitude: f64,
}

impl MediaLocation {
	/// Create a new [`MediaLocation`] from an already signed latitude and longitude pair.
	///
	/// Neither value is rounded or clamped.
	///
	/// # Examples
	///
	/// ```
	/// use gt_media_metadata::MediaLocation;
	///
	/// let x = MediaLocation::new(38.89767633, -7.36560353);
	/// assert_eq!(x.coordinates(), (38.89767633, -7.36560353));
	/// ```
	#[must_use]
	pub const fn new(latitude: f64, longitude: f64) -> Self {
		Self {
			latitude,
			longitude,
		}
	}

	/// Create a new [`MediaLocation`] from a [`GpsRecord`].
	///
	/// Both axes are converted from DMS, then negated for a South latitude or a West longitude.
	pub fn from_gps(gps: &GpsRecord) -> Result<Self> {
		let [latitude, longitude] = [
			(Axis::Latitude, GPS_LATITUDE, GPS_LATITUDE_REF),
			(Axis::Longitude, GPS_LONGITUDE, GPS_LONGITUDE_REF),
		]
		.map(|(axis, tag, reference)| {
			gps.get(tag)
				.ok_or(Error::MissingGpsTag(tag))
				.and_then(dms_to_decimal)
				.map(|x| axis.apply_reference(x, gps.get_text(reference)))
		});

		Ok(Self::new(latitude?, longitude?))
	}

	/// This returns the contained coordinates as `(latitude, longitude)`
	#[inline]
	#[must_use]
	pub const fn coordinates(&self) -> (f64, f64) {
		(self.latitude, self.longitude)
	}

	/// A Google Maps link centred on this location.
	///
	/// # Examples
	///
	/// ```
	/// use gt_media_metadata::MediaLocation;
	///
	/// let home = MediaLocation::new(-40.5, 12.0);
	/// assert_eq!(home.maps_url(), "https://www.google.com/maps?q=-40.5,12.0");
	/// ```
	#[must_use]
	pub fn maps_url(&self) -> String {
		format!(
			"{MAPS_URL_BASE}{},{}",
			Degrees(self.latitude),
			Degrees(self.longitude)
		)
	}

	/// The latitude, formatted for display.
	#[must_use]
	pub fn latitude(&self) -> impl Display {
		Degrees(self.latitude)
	}

	/// The longitude, formatted for display.
	#[must_use]
	pub fn longitude(&self) -> impl Display {
		Degrees(self.longitude)
	}
}

/// Shortest round-trip form that always keeps a fractional digit, so `40` prints as `40.0`.
///
/// Very small or large values switch to scientific notation with a signed, two digit exponent
/// (`1e-06`, `1e+16`).
struct Degrees(f64);

impl Display for Degrees {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let repr = format!("{:?}", self.0);

		match repr.split_once('e') {
			Some((mantissa, exponent)) => {
				let (sign, digits) = exponent
					.strip_prefix('-')
					.map_or(('+', exponent), |digits| ('-', digits));
				write!(f, "{mantissa}e{sign}{digits:0>2}")
			}
			None => f.write_str(&repr),
		}
	}
}
