use super::{GeometryTrait, Point};
use serde_json::Value;
use std::fmt::Debug;

/// A straight segment between exactly two points.
///
/// Structurally the same as a two-point [`super::Path`]; the reader produces a `Line`
/// for every `LineString` with exactly two positions.
#[derive(Clone, PartialEq)]
pub struct Line(pub [Point; 2]);

impl Line {
	#[must_use]
	pub fn new(start: Point, end: Point) -> Self {
		Self([start, end])
	}

	#[must_use]
	pub fn start(&self) -> &Point {
		&self.0[0]
	}

	#[must_use]
	pub fn end(&self) -> &Point {
		&self.0[1]
	}
}

impl GeometryTrait for Line {
	fn points(&self) -> &[Point] {
		&self.0
	}

	fn geojson_type(&self) -> &'static str {
		"LineString"
	}

	fn to_coord_json(&self) -> Value {
		Value::from(vec![self.start().to_json(), self.end().to_json()])
	}
}

impl Debug for Line {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}
