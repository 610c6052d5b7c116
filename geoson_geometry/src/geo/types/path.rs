use super::{GeometryTrait, Point};
use serde_json::Value;
use std::fmt::Debug;

/// An ordered sequence of points, written as a `LineString`.
///
/// Used for every imported `LineString` that does not have exactly two positions,
/// so it may hold zero or one point.
#[derive(Clone, Default, PartialEq)]
pub struct Path(pub Vec<Point>);

impl Path {
	#[must_use]
	pub fn new(points: Vec<Point>) -> Self {
		Self(points)
	}
}

impl GeometryTrait for Path {
	fn points(&self) -> &[Point] {
		&self.0
	}

	fn geojson_type(&self) -> &'static str {
		"LineString"
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(Point::to_json).collect::<Vec<_>>())
	}
}

impl Debug for Path {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_points!(Path);
