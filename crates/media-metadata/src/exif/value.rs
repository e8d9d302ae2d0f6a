use std::{collections::BTreeMap, fmt::Display};

use exif::Value;

/// A numerator/denominator pair, as EXIF stores its non-integer quantities.
///
/// Both the unsigned and signed EXIF rationals widen into this.
#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize)]
pub struct Rational {
	pub num: i64,
	pub denom: i64,
}

impl Rational {
	#[must_use]
	pub const fn new(num: i64, denom: i64) -> Self {
		Self { num, denom }
	}

	/// Returns `None` for a zero denominator.
	///
	/// # Examples
	///
	/// ```
	/// use gt_media_metadata::Rational;
	///
	/// assert_eq!(Rational::new(1, 2).to_f64(), Some(0.5));
	/// assert_eq!(Rational::new(1, 0).to_f64(), None);
	/// ```
	#[must_use]
	#[allow(clippy::as_conversions, clippy::cast_precision_loss)]
	pub fn to_f64(self) -> Option<f64> {
		(self.denom != 0).then(|| self.num as f64 / self.denom as f64)
	}
}

impl Display for Rational {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}/{}", self.num, self.denom)
	}
}

/// The value of a single EXIF tag.
///
/// EXIF mixes strings, integers and rational tuples within one IFD, so every field is carried
/// as one of these variants and callers pick the shape they expect for a given tag.
#[derive(Clone, PartialEq, Debug, serde::Serialize)]
#[serde(untagged)]
pub enum TagValue {
	Text(String),
	Unsigned(Vec<u32>),
	Signed(Vec<i32>),
	Rational(Vec<Rational>),
	Float(Vec<f64>),
	Bytes(Vec<u8>),
	/// A nested IFD keyed by raw tag id. Only the GPS sub-record uses this.
	Directory(BTreeMap<u16, TagValue>),
	Unknown,
}

impl TagValue {
	#[must_use]
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	#[must_use]
	pub const fn as_directory(&self) -> Option<&BTreeMap<u16, Self>> {
		match self {
			Self::Directory(entries) => Some(entries),
			_ => None,
		}
	}

	/// Short name of the variant, used when reporting a value of the wrong shape.
	#[must_use]
	pub const fn kind(&self) -> &'static str {
		match self {
			Self::Text(_) => "text",
			Self::Unsigned(_) => "unsigned integers",
			Self::Signed(_) => "signed integers",
			Self::Rational(_) => "rationals",
			Self::Float(_) => "floats",
			Self::Bytes(_) => "raw bytes",
			Self::Directory(_) => "a directory",
			Self::Unknown => "an unknown value",
		}
	}
}

impl From<&Value> for TagValue {
	fn from(value: &Value) -> Self {
		match value {
			Value::Ascii(strings) => Self::Text(
				strings
					.iter()
					.map(|s| {
						String::from_utf8_lossy(s)
							.trim_end_matches('\0')
							.to_string()
					})
					.collect::<Vec<_>>()
					.join(", "),
			),
			Value::Byte(v) => Self::Unsigned(v.iter().copied().map(u32::from).collect()),
			Value::Short(v) => Self::Unsigned(v.iter().copied().map(u32::from).collect()),
			Value::Long(v) => Self::Unsigned(v.clone()),
			Value::SByte(v) => Self::Signed(v.iter().copied().map(i32::from).collect()),
			Value::SShort(v) => Self::Signed(v.iter().copied().map(i32::from).collect()),
			Value::SLong(v) => Self::Signed(v.clone()),
			Value::Rational(v) => Self::Rational(
				v.iter()
					.map(|r| Rational::new(i64::from(r.num), i64::from(r.denom)))
					.collect(),
			),
			Value::SRational(v) => Self::Rational(
				v.iter()
					.map(|r| Rational::new(i64::from(r.num), i64::from(r.denom)))
					.collect(),
			),
			Value::Float(v) => Self::Float(v.iter().copied().map(f64::from).collect()),
			Value::Double(v) => Self::Float(v.clone()),
			Value::Undefined(bytes, _) => Self::Bytes(bytes.clone()),
			Value::Unknown(..) => Self::Unknown,
		}
	}
}

fn join<T: Display>(f: &mut std::fmt::Formatter<'_>, items: &[T]) -> std::fmt::Result {
	for (i, item) in items.iter().enumerate() {
		if i > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{item}")?;
	}
	Ok(())
}

impl Display for TagValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Text(text) => f.write_str(text),
			Self::Unsigned(v) => join(f, v),
			Self::Signed(v) => join(f, v),
			Self::Rational(v) => join(f, v),
			Self::Float(v) => join(f, v),
			Self::Bytes(bytes) => bytes.iter().try_for_each(|b| write!(f, "{b:02x}")),
			Self::Directory(entries) => write!(f, "<{} entries>", entries.len()),
			Self::Unknown => f.write_str("<unknown>"),
		}
	}
}
