use std::{collections::BTreeMap, path::Path};

use exif::Context;
use tracing::{debug, trace};

mod consts;
mod device;
mod geographic;
mod reader;
mod tags;
mod value;

pub use consts::{DEVICE_TAGS, DMS_DIVISION, GPS_INFO_KEY, MAPS_URL_BASE, UNKNOWN};
pub use device::DeviceInfo;
pub use geographic::{convert_dms, dms_to_decimal, Axis, GpsRecord, MediaLocation};
pub use reader::ExifReader;
pub use tags::{gps_tag_name, tag_name};
pub use value::{Rational, TagValue};

use crate::{Error, Result};

/// Every primary image tag of one image, keyed by tag name.
///
/// The TIFF and Exif IFDs are flattened into one map. GPS fields are nested, keyed by their raw
/// tag id, under [`GPS_INFO_KEY`].
#[derive(Default, Clone, Debug, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct ExifRecord {
	tags: BTreeMap<String, TagValue>,
}

impl ExifRecord {
	/// Reads the EXIF record of the image at `path`.
	///
	/// `Ok(None)` means the file was understood but carries no EXIF data, anything that stopped us
	/// from decoding the file at all is an `Err`.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Option<Self>> {
		let path = path.as_ref();
		debug!(path = %path.display(), "reading exif data");

		Self::classify(ExifReader::from_path(path).map(|reader| Self::from_reader(&reader)))
	}

	pub fn from_slice(bytes: &[u8]) -> Result<Option<Self>> {
		Self::classify(ExifReader::from_slice(bytes).map(|reader| Self::from_reader(&reader)))
	}

	fn classify(res: Result<Self>) -> Result<Option<Self>> {
		match res {
			Ok(record) if record.is_empty() => {
				debug!("exif block holds no primary image fields");
				Ok(None)
			}
			Ok(record) => {
				debug!(tags = record.len(), "read exif data");
				Ok(Some(record))
			}
			Err(Error::Exif(
				exif::Error::NotFound(_)
				| exif::Error::NotSupported(_)
				| exif::Error::BlankValue(_),
			)) => {
				debug!("no exif data present");
				Ok(None)
			}
			Err(e) => Err(e),
		}
	}

	#[must_use]
	pub fn from_reader(reader: &ExifReader) -> Self {
		let mut tags = BTreeMap::new();
		let mut gps = BTreeMap::new();
		let mut has_gps_ifd = false;

		for field in reader.primary_fields() {
			match field.tag.context() {
				Context::Gps => {
					trace!(tag = %field.tag, "gps field");
					gps.insert(field.tag.number(), TagValue::from(&field.value));
				}
				Context::Tiff | Context::Exif => {
					if field.tag == exif::Tag::GPSInfoIFDPointer {
						has_gps_ifd = true;
					}
					if consts::POINTER_TAGS.contains(&field.tag) {
						continue;
					}
					let name = tag_name(field.tag);
					trace!(tag = %name, "field");
					tags.insert(name, TagValue::from(&field.value));
				}
				_ => {}
			}
		}

		if has_gps_ifd || !gps.is_empty() {
			tags.insert(GPS_INFO_KEY.to_string(), TagValue::Directory(gps));
		}

		Self { tags }
	}

	#[must_use]
	pub fn get(&self, name: &str) -> Option<&TagValue> {
		self.tags.get(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
		self.tags.iter().map(|(name, value)| (name.as_str(), value))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.tags.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.tags.is_empty()
	}
}

impl FromIterator<(String, TagValue)> for ExifRecord {
	fn from_iter<I: IntoIterator<Item = (String, TagValue)>>(iter: I) -> Self {
		Self {
			tags: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tracing_test::traced_test;

	#[test]
	#[traced_test]
	fn missing_exif_is_logged() {
		let res = ExifRecord::classify(Err(exif::Error::NotFound("PNG").into()));
		assert!(matches!(res, Ok(None)));
		assert!(logs_contain("no exif data present"));
	}

	#[test]
	fn missing_exif_is_not_an_error() {
		for e in [
			exif::Error::NotFound("JPEG"),
			exif::Error::NotSupported("HEIF"),
			exif::Error::BlankValue("Make"),
		] {
			assert!(matches!(ExifRecord::classify(Err(e.into())), Ok(None)));
		}
	}

	#[test]
	fn decode_failures_propagate() {
		let res = ExifRecord::classify(Err(exif::Error::InvalidFormat("Broken TIFF").into()));
		assert!(matches!(res, Err(Error::Exif(exif::Error::InvalidFormat(_)))));
	}

	#[test]
	fn empty_record_counts_as_no_data() {
		assert!(matches!(
			ExifRecord::classify(Ok(ExifRecord::default())),
			Ok(None)
		));
	}

	#[test]
	fn unknown_container_is_a_decode_failure() {
		assert!(ExifRecord::from_slice(b"definitely not an image").is_err());
	}
}
