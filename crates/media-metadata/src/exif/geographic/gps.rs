use std::collections::BTreeMap;

use tracing::trace;

use crate::{
	exif::{consts::GPS_INFO_KEY, gps_tag_name},
	ExifRecord, TagValue,
};

/// The GPS sub-record of an image, keyed by GPS tag name.
#[derive(Default, Clone, Debug, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct GpsRecord {
	tags: BTreeMap<String, TagValue>,
}

impl GpsRecord {
	/// Pulls the GPS sub-record out of `record`, translating every GPS tag id into its name.
	///
	/// Returns `None` when the image has no GPS IFD, or when that IFD is empty.
	#[must_use]
	pub fn from_record(record: &ExifRecord) -> Option<Self> {
		let entries = record.get(GPS_INFO_KEY)?.as_directory()?;

		let tags = entries
			.iter()
			.map(|(&id, value)| {
				let name = gps_tag_name(id);
				trace!(id, %name, "translated gps tag");
				(name, value.clone())
			})
			.collect::<BTreeMap<_, _>>();

		(!tags.is_empty()).then_some(Self { tags })
	}

	#[must_use]
	pub fn get(&self, name: &str) -> Option<&TagValue> {
		self.tags.get(name)
	}

	/// Convenience for the single letter reference tags.
	#[must_use]
	pub fn get_text(&self, name: &str) -> Option<&str> {
		self.get(name).and_then(TagValue::as_text)
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
