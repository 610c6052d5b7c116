use crate::Point;

/// A position in the local East-North-Up frame, in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Enu {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

impl From<Enu> for Point {
	fn from(value: Enu) -> Self {
		Point::new(value.x, value.y, value.z)
	}
}
