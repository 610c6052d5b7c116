use super::{GeometryTrait, Point};
use serde_json::Value;
use std::fmt::Debug;

/// The outer ring of a polygon. Holes are not modelled.
///
/// The ring is stored as given; closure and winding are not checked.
#[derive(Clone, Default, PartialEq)]
pub struct Polygon(pub Vec<Point>);

impl Polygon {
	#[must_use]
	pub fn new(ring: Vec<Point>) -> Self {
		Self(ring)
	}
}

impl GeometryTrait for Polygon {
	fn points(&self) -> &[Point] {
		&self.0
	}

	fn geojson_type(&self) -> &'static str {
		"Polygon"
	}

	/// Writes the ring as the only ring of the polygon.
	fn to_coord_json(&self) -> Value {
		let ring = Value::from(self.0.iter().map(Point::to_json).collect::<Vec<_>>());
		Value::from(vec![ring])
	}
}

impl Debug for Polygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_points!(Polygon);
