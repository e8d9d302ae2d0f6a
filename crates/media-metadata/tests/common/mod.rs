//! EXIF fixtures, written as bare TIFF files so `kamadak-exif` can read them back.

#![allow(dead_code)]

use std::{
	io::Cursor,
	path::{Path, PathBuf},
};

use exif::{experimental::Writer, Field, In, Rational, Tag, Value};

pub fn ascii(tag: Tag, text: &str) -> Field {
	Field {
		tag,
		ifd_num: In::PRIMARY,
		value: Value::Ascii(vec![text.as_bytes().to_vec()]),
	}
}

pub fn dms(tag: Tag, degrees: u32, minutes: u32, seconds: u32) -> Field {
	rationals(tag, &[(degrees, 1), (minutes, 1), (seconds, 1)])
}

pub fn rationals(tag: Tag, parts: &[(u32, u32)]) -> Field {
	Field {
		tag,
		ifd_num: In::PRIMARY,
		value: Value::Rational(
			parts
				.iter()
				.map(|&(num, denom)| Rational { num, denom })
				.collect(),
		),
	}
}

pub fn device_fields() -> Vec<Field> {
	vec![
		ascii(Tag::Make, "Canon"),
		ascii(Tag::Model, "Canon EOS R6"),
		ascii(Tag::Software, "Firmware 1.8.1"),
		ascii(Tag::DateTime, "2023:07:14 09:41:27"),
	]
}

pub fn gps_fields(lat_ref: &str, long_ref: &str) -> Vec<Field> {
	vec![
		dms(Tag::GPSLatitude, 40, 26, 46),
		ascii(Tag::GPSLatitudeRef, lat_ref),
		dms(Tag::GPSLongitude, 79, 58, 56),
		ascii(Tag::GPSLongitudeRef, long_ref),
	]
}

pub fn tiff(fields: &[Field]) -> Vec<u8> {
	let mut writer = Writer::new();
	for field in fields {
		writer.push_field(field);
	}

	let mut buf = Cursor::new(Vec::new());
	writer.write(&mut buf, false).unwrap();
	buf.into_inner()
}

pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
	let path = dir.join(name);
	std::fs::write(&path, bytes).unwrap();
	path
}
