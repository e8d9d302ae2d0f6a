//! Tag id to name translation.
//!
//! The tables themselves live in `kamadak-exif`, which knows the name of every tag in the
//! EXIF 2.32 and DCF specs. Tags it doesn't know fall back to their decimal tag number.

use exif::{Context, Tag};

/// Human readable name for a primary image (TIFF or Exif IFD) tag.
///
/// # Examples
///
/// ```
/// use exif::{Context, Tag};
/// use gt_media_metadata::exif::tag_name;
///
/// assert_eq!(tag_name(Tag::Make), "Make");
/// assert_eq!(tag_name(Tag(Context::Tiff, 0xfff0)), "65520");
/// ```
#[must_use]
pub fn tag_name(tag: Tag) -> String {
	tag.description()
		.map_or_else(|| tag.number().to_string(), |_| tag.to_string())
}

/// Human readable name for a GPS IFD tag, looked up by its raw id.
///
/// # Examples
///
/// ```
/// use gt_media_metadata::exif::gps_tag_name;
///
/// assert_eq!(gps_tag_name(2), "GPSLatitude");
/// assert_eq!(gps_tag_name(4), "GPSLongitude");
/// ```
#[must_use]
pub fn gps_tag_name(number: u16) -> String {
	tag_name(Tag(Context::Gps, number))
}
