use super::{consts::UNKNOWN, tag_name, ExifRecord, DEVICE_TAGS};

/// The device fields we print for every image, already resolved to display strings.
#[derive(Clone, PartialEq, Eq, Debug, serde::Serialize)]
pub struct DeviceInfo {
	pub make: String,
	pub model: String,
	pub software: String,
	pub date_time: String,
}

impl DeviceInfo {
	/// Any field missing from `record` falls back to [`UNKNOWN`] on its own.
	///
	/// # Examples
	///
	/// ```
	/// use gt_media_metadata::{DeviceInfo, ExifRecord, TagValue};
	///
	/// let record: ExifRecord = [("Make".to_string(), TagValue::Text("Canon".to_string()))]
	/// 	.into_iter()
	/// 	.collect();
	///
	/// let info = DeviceInfo::from_record(&record);
	/// assert_eq!(info.make, "Canon");
	/// assert_eq!(info.model, "Unknown");
	/// ```
	#[must_use]
	pub fn from_record(record: &ExifRecord) -> Self {
		let [make, model, software, date_time] = DEVICE_TAGS.map(|tag| {
			record
				.get(&tag_name(tag))
				.map_or_else(|| UNKNOWN.to_string(), ToString::to_string)
		});

		Self {
			make,
			model,
			software,
			date_time,
		}
	}

	/// `(label, value)` pairs in print order.
	#[must_use]
	pub fn fields(&self) -> [(&'static str, &str); 4] {
		[
			("Make", self.make.as_str()),
			("Model", self.model.as_str()),
			("Software", self.software.as_str()),
			("Date/Time", self.date_time.as_str()),
		]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::TagValue;

	fn text(name: &str, value: &str) -> (String, TagValue) {
		(name.to_string(), TagValue::Text(value.to_string()))
	}

	#[test]
	fn every_field_present() {
		let record: ExifRecord = [
			text("Make", "NIKON CORPORATION"),
			text("Model", "NIKON D750"),
			text("Software", "Ver.1.10"),
			text("DateTime", "2019:06:02 14:22:03"),
		]
		.into_iter()
		.collect();

		assert_eq!(
			DeviceInfo::from_record(&record),
			DeviceInfo {
				make: "NIKON CORPORATION".to_string(),
				model: "NIKON D750".to_string(),
				software: "Ver.1.10".to_string(),
				date_time: "2019:06:02 14:22:03".to_string(),
			}
		);
	}

	#[test]
	fn missing_fields_fall_back_independently() {
		let record: ExifRecord = [text("Model", "Pixel 7"), text("DateTime", "2023:01:01 00:00:00")]
			.into_iter()
			.collect();

		let info = DeviceInfo::from_record(&record);
		assert_eq!(info.make, UNKNOWN);
		assert_eq!(info.model, "Pixel 7");
		assert_eq!(info.software, UNKNOWN);
		assert_eq!(info.date_time, "2023:01:01 00:00:00");
	}

	#[test]
	fn empty_record_is_all_unknown() {
		let info = DeviceInfo::from_record(&ExifRecord::default());
		assert!(info.fields().iter().all(|(_, value)| *value == UNKNOWN));
	}

	#[test]
	fn non_text_values_are_displayed() {
		let record: ExifRecord = [("Software".to_string(), TagValue::Unsigned(vec![7]))]
			.into_iter()
			.collect();
		assert_eq!(DeviceInfo::from_record(&record).software, "7");
	}
}
