use super::GeometryTrait;
use serde_json::{Value, json};
use std::fmt::Debug;

/// A position in the local planar frame, in meters.
///
/// The model never stores geodetic coordinates: everything is projected into the
/// local frame when a document is read.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

impl Point {
	#[must_use]
	pub fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	/// Returns the point as a JSON array `[x, y, z]`.
	#[must_use]
	pub fn to_json(&self) -> Value {
		json!([self.x, self.y, self.z])
	}
}

impl GeometryTrait for Point {
	fn points(&self) -> &[Point] {
		std::slice::from_ref(self)
	}

	fn geojson_type(&self) -> &'static str {
		"Point"
	}

	fn to_coord_json(&self) -> Value {
		self.to_json()
	}
}

impl From<[f64; 3]> for Point {
	fn from(value: [f64; 3]) -> Self {
		Self::new(value[0], value[1], value[2])
	}
}

impl<'a, T> From<&'a [T; 3]> for Point
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 3]) -> Self {
		Self::new(value[0].into(), value[1].into(), value[2].into())
	}
}

impl From<(f64, f64, f64)> for Point {
	fn from(value: (f64, f64, f64)) -> Self {
		Self::new(value.0, value.1, value.2)
	}
}

impl From<Point> for [f64; 3] {
	fn from(value: Point) -> Self {
		[value.x, value.y, value.z]
	}
}

impl Debug for Point {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		[self.x, self.y, self.z].fmt(f)
	}
}
