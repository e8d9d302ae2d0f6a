mod dms;
mod gps;
mod location;

pub use dms::{convert_dms, dms_to_decimal, Axis};
pub use gps::GpsRecord;
pub use location::MediaLocation;
