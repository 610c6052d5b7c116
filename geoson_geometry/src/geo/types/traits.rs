use super::Point;
use serde_json::Value;
use std::fmt::Debug;

/// Common interface of the four shapes a [`crate::Geometry`] can hold.
pub trait GeometryTrait: Debug + Clone {
	/// Returns all points of the shape in order.
	fn points(&self) -> &[Point];

	/// Returns the GeoJSON `type` this shape is written as.
	///
	/// Both [`super::Line`] and [`super::Path`] are written as `LineString`.
	fn geojson_type(&self) -> &'static str;

	/// Converts the shape into the JSON value of a GeoJSON `coordinates` member.
	fn to_coord_json(&self) -> Value;

	/// Returns the number of points of the shape.
	fn len(&self) -> usize {
		self.points().len()
	}

	/// Checks whether the shape has no points.
	fn is_empty(&self) -> bool {
		self.points().is_empty()
	}
}
