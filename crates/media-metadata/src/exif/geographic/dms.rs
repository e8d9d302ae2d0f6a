use std::ops::Neg;

use crate::{exif::consts::DMS_DIVISION, Error, Result, TagValue};

/// Converts a degrees/minutes/seconds triple into decimal degrees.
///
/// No hemisphere sign is applied and nothing is clamped: out of range minutes or seconds go
/// through the arithmetic as given.
///
/// # Examples
///
/// ```
/// use gt_media_metadata::convert_dms;
///
/// let decimal = convert_dms(40.0, 26.0, 46.0);
/// assert!((decimal - 40.446_111).abs() < 1e-6);
/// ```
#[must_use]
pub fn convert_dms(degrees: f64, minutes: f64, seconds: f64) -> f64 {
	[degrees, minutes, seconds]
		.iter()
		.zip(DMS_DIVISION.iter())
		.map(|(x, y)| x / y)
		.sum()
}

/// Converts an EXIF `GPSLatitude`/`GPSLongitude` value into decimal degrees.
///
/// The value must hold exactly three numeric components. Rationals, integers and floats are all
/// accepted.
///
/// Unlike a plain float conversion, a rational with a zero denominator is rejected with
/// [`Error::ZeroDenominator`] instead of turning into `NaN` or infinity.
pub fn dms_to_decimal(value: &TagValue) -> Result<f64> {
	let components = components(value)?;

	match components[..] {
		[degrees, minutes, seconds] => Ok(convert_dms(degrees, minutes, seconds)),
		_ => Err(Error::CoordinateArity {
			expected: DMS_DIVISION.len(),
			found: components.len(),
		}),
	}
}

fn components(value: &TagValue) -> Result<Vec<f64>> {
	match value {
		TagValue::Rational(v) => v
			.iter()
			.map(|r| r.to_f64().ok_or(Error::ZeroDenominator))
			.collect(),
		TagValue::Unsigned(v) => Ok(v.iter().copied().map(f64::from).collect()),
		TagValue::Signed(v) => Ok(v.iter().copied().map(f64::from).collect()),
		TagValue::Float(v) => Ok(v.clone()),
		other => Err(Error::NonNumericCoordinate(other.kind())),
	}
}

/// Which coordinate a GPS reference applies to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
	Latitude,
	Longitude,
}

impl Axis {
	/// The reference letter that flips this axis negative.
	#[must_use]
	pub const fn negative_reference(self) -> &'static str {
		match self {
			Self::Latitude => "S",
			Self::Longitude => "W",
		}
	}

	/// Negates `value` for a southern latitude or a western longitude.
	///
	/// Every other reference, including a missing one, leaves `value` alone.
	///
	/// # Examples
	///
	/// ```
	/// use gt_media_metadata::Axis;
	///
	/// assert_eq!(Axis::Latitude.apply_reference(12.5, Some("S")), -12.5);
	/// assert_eq!(Axis::Latitude.apply_reference(12.5, Some("W")), 12.5);
	/// assert_eq!(Axis::Longitude.apply_reference(12.5, None), 12.5);
	/// ```
	#[must_use]
	pub fn apply_reference(self, value: f64, reference: Option<&str>) -> f64 {
		if reference.map(str::trim) == Some(self.negative_reference()) {
			value.neg()
		} else {
			value
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Rational;

	fn rationals(parts: &[(i64, i64)]) -> TagValue {
		TagValue::Rational(parts.iter().map(|&(n, d)| Rational::new(n, d)).collect())
	}

	#[test]
	fn formula_is_exact() {
		for (d, m, s) in [
			(0.0, 0.0, 0.0),
			(40.0, 26.0, 46.0),
			(53.0, 19.0, 35.11),
			(179.0, 59.0, 59.999),
			(12.0, 0.5, 0.25),
		] {
			assert_eq!(convert_dms(d, m, s), d + m / 60.0 + s / 3600.0);
		}
	}

	#[test]
	fn new_york_ish() {
		let decimal = dms_to_decimal(&rationals(&[(40, 1), (26, 1), (46, 1)])).unwrap();
		assert!((decimal - 40.446_111_111).abs() < 1e-9, "got {decimal}");
	}

	#[test]
	fn fractional_seconds() {
		let decimal = dms_to_decimal(&rationals(&[(53, 1), (19, 1), (3511, 100)])).unwrap();
		assert_eq!(decimal, convert_dms(53.0, 19.0, 35.11));
	}

	#[test]
	fn southern_latitude_is_negative() {
		let decimal = dms_to_decimal(&rationals(&[(40, 1), (26, 1), (46, 1)])).unwrap();
		let lat = Axis::Latitude.apply_reference(decimal, Some("S"));
		assert!((lat + 40.446_111_111).abs() < 1e-9, "got {lat}");
	}

	#[test]
	fn references_only_flip_their_own_axis() {
		assert_eq!(Axis::Latitude.apply_reference(1.0, Some("S")), -1.0);
		assert_eq!(Axis::Latitude.apply_reference(1.0, Some("N")), 1.0);
		assert_eq!(Axis::Latitude.apply_reference(1.0, None), 1.0);
		assert_eq!(Axis::Longitude.apply_reference(1.0, Some("W")), -1.0);
		assert_eq!(Axis::Longitude.apply_reference(1.0, Some("E")), 1.0);
		assert_eq!(Axis::Longitude.apply_reference(1.0, Some("S")), 1.0);
		assert_eq!(Axis::Longitude.apply_reference(1.0, None), 1.0);
	}

	#[test]
	fn out_of_range_values_are_not_clamped() {
		let decimal = dms_to_decimal(&rationals(&[(10, 1), (90, 1), (7200, 1)])).unwrap();
		assert_eq!(decimal, 10.0 + 90.0 / 60.0 + 7200.0 / 3600.0);
	}

	#[test]
	fn integers_and_floats_are_accepted() {
		assert_eq!(
			dms_to_decimal(&TagValue::Unsigned(vec![40, 26, 46])).unwrap(),
			convert_dms(40.0, 26.0, 46.0)
		);
		assert_eq!(
			dms_to_decimal(&TagValue::Float(vec![1.0, 30.0, 0.0])).unwrap(),
			1.5
		);
	}

	#[test]
	fn wrong_arity() {
		let err = dms_to_decimal(&rationals(&[(40, 1), (26, 1)])).unwrap_err();
		assert!(matches!(
			err,
			Error::CoordinateArity {
				expected: 3,
				found: 2
			}
		));

		let err = dms_to_decimal(&TagValue::Unsigned(vec![1, 2, 3, 4])).unwrap_err();
		assert!(matches!(err, Error::CoordinateArity { found: 4, .. }));
	}

	#[test]
	fn non_numeric() {
		let err = dms_to_decimal(&TagValue::Text("40 deg 26' 46\"".to_string())).unwrap_err();
		assert!(matches!(err, Error::NonNumericCoordinate("text")));
	}

	#[test]
	fn zero_denominator() {
		let err = dms_to_decimal(&rationals(&[(40, 1), (26, 0), (46, 1)])).unwrap_err();
		assert!(matches!(err, Error::ZeroDenominator));
	}
}
