use exif::Tag;

/// Used for converting DMS to decimal coordinates, and is the amount to divide by.
///
/// # Examples:
///
/// ```
/// use gt_media_metadata::exif::DMS_DIVISION;
///
/// let latitude = [53.0, 19.0, 35.11]; // in DMS
/// let decimal: f64 = latitude.iter().zip(DMS_DIVISION.iter()).map(|(x, y)| x / y).sum();
/// assert!((decimal - 53.326_419_4).abs() < 1e-6);
/// ```
pub const DMS_DIVISION: [f64; 3] = [1.0, 60.0, 3600.0];

/// The key the GPS sub-record lives under inside an [`ExifRecord`](super::ExifRecord).
pub const GPS_INFO_KEY: &str = "GPSInfo";

/// Printed in place of any device field the image doesn't carry.
pub const UNKNOWN: &str = "Unknown";

/// Base of the map link printed alongside a decoded location.
pub const MAPS_URL_BASE: &str = "https://www.google.com/maps?q=";

/// The device tags we report on, in the order they're printed.
pub const DEVICE_TAGS: [Tag; 4] = [Tag::Make, Tag::Model, Tag::Software, Tag::DateTime];

/// IFD pointers are structural, the fields they point at are merged into the record instead.
pub const POINTER_TAGS: [Tag; 3] = [
	Tag::ExifIFDPointer,
	Tag::GPSInfoIFDPointer,
	Tag::InteropIFDPointer,
];

pub const GPS_LATITUDE: &str = "GPSLatitude";
pub const GPS_LATITUDE_REF: &str = "GPSLatitudeRef";
pub const GPS_LONGITUDE: &str = "GPSLongitude";
pub const GPS_LONGITUDE_REF: &str = "GPSLongitudeRef";
