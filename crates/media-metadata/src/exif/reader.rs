use std::{
	fs::File,
	io::{BufReader, Cursor},
	path::Path,
};

use exif::{Exif, Field, In};

use crate::{Error, Result};

/// Thin wrapper over the decoded EXIF attributes of one image.
pub struct ExifReader(Exif);

impl ExifReader {
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let file = File::open(path).map_err(|e| Error::Io(e, path.into()))?;
		let mut reader = BufReader::new(file);
		Ok(Self(exif::Reader::new().read_from_container(&mut reader)?))
	}

	pub fn from_slice(bytes: &[u8]) -> Result<Self> {
		Ok(Self(
			exif::Reader::new().read_from_container(&mut Cursor::new(bytes))?,
		))
	}

	/// Every field belonging to the primary image. Thumbnail fields are skipped.
	pub fn primary_fields(&self) -> impl Iterator<Item = &Field> {
		self.0.fields().filter(|field| field.ifd_num == In::PRIMARY)
	}
}

impl std::fmt::Debug for ExifReader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ExifReader")
			.field("fields", &self.0.fields().count())
			.finish()
	}
}
