use super::*;
use serde_json::Value;
use std::fmt::Debug;

/// A single shape of the geometry model.
///
/// Multi-geometries and geometry collections of a document are never stored as such:
/// the reader flattens them into one feature per component.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(Point),
	Line(Line),
	Path(Path),
	Polygon(Polygon),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		Point: From<T>,
	{
		Self::Point(Point::from(value))
	}
	pub fn new_line<T>(start: T, end: T) -> Self
	where
		Point: From<T>,
	{
		Self::Line(Line::new(Point::from(start), Point::from(end)))
	}
	pub fn new_path<T>(value: Vec<T>) -> Self
	where
		Point: From<T>,
	{
		Self::Path(Path::from(value))
	}
	pub fn new_polygon<T>(value: Vec<T>) -> Self
	where
		Point: From<T>,
	{
		Self::Polygon(Polygon::from(value))
	}

	/// Builds a `Line` from exactly two points and a `Path` from any other count.
	pub fn from_line_points(points: Vec<Point>) -> Self {
		match <[Point; 2]>::try_from(points) {
			Ok(pair) => Self::Line(Line(pair)),
			Err(points) => Self::Path(Path::new(points)),
		}
	}

	/// Name of the variant, as shown in summaries.
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::Line(_) => "Line",
			Geometry::Path(_) => "Path",
			Geometry::Polygon(_) => "Polygon",
		}
	}

	pub fn points(&self) -> &[Point] {
		match self {
			Geometry::Point(g) => g.points(),
			Geometry::Line(g) => g.points(),
			Geometry::Path(g) => g.points(),
			Geometry::Polygon(g) => g.points(),
		}
	}

	/// GeoJSON `type` the geometry is written as.
	pub fn geojson_type(&self) -> &'static str {
		match self {
			Geometry::Point(g) => g.geojson_type(),
			Geometry::Line(g) => g.geojson_type(),
			Geometry::Path(g) => g.geojson_type(),
			Geometry::Polygon(g) => g.geojson_type(),
		}
	}

	pub fn to_coord_json(&self) -> Value {
		match self {
			Geometry::Point(g) => g.to_coord_json(),
			Geometry::Line(g) => g.to_coord_json(),
			Geometry::Path(g) => g.to_coord_json(),
			Geometry::Polygon(g) => g.to_coord_json(),
		}
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new_polygon(vec![[0.0, 0.0, 0.0], [5.0, 0.0, 0.0], [2.5, 4.0, 0.0], [0.0, 0.0, 0.0]])
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (type_name, inner): (&str, &dyn Debug) = match self {
			Geometry::Point(g) => ("Point", g),
			Geometry::Line(g) => ("Line", g),
			Geometry::Path(g) => ("Path", g),
			Geometry::Polygon(g) => ("Polygon", g),
		};
		f.debug_tuple(type_name).field(inner).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(0, "Path")]
	#[case(1, "Path")]
	#[case(2, "Line")]
	#[case(3, "Path")]
	#[case(7, "Path")]
	fn line_or_path_by_point_count(#[case] count: usize, #[case] expected: &str) {
		let points = (0..count).map(|i| Point::new(i as f64, 0.0, 0.0)).collect::<Vec<_>>();
		let geometry = Geometry::from_line_points(points.clone());
		assert_eq!(geometry.type_name(), expected);
		assert_eq!(geometry.points(), points.as_slice());
	}

	#[test]
	fn line_keeps_point_order() {
		let geometry = Geometry::from_line_points(vec![Point::new(1.0, 0.0, 0.0), Point::new(2.0, 0.0, 0.0)]);
		let Geometry::Line(line) = geometry else {
			panic!("expected a line");
		};
		assert_eq!(line.start().x, 1.0);
		assert_eq!(line.end().x, 2.0);
	}

	#[test]
	fn geojson_type_per_variant() {
		assert_eq!(Geometry::new_point([0.0, 0.0, 0.0]).geojson_type(), "Point");
		assert_eq!(
			Geometry::new_line([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]).geojson_type(),
			"LineString"
		);
		assert_eq!(Geometry::new_path(vec![[0.0, 0.0, 0.0]]).geojson_type(), "LineString");
		assert_eq!(Geometry::new_example().geojson_type(), "Polygon");
	}

	#[test]
	fn coord_json_delegates_to_shape() {
		assert_eq!(
			Geometry::new_point([1.0, 2.0, 3.0]).to_coord_json(),
			json!([1.0, 2.0, 3.0])
		);
		assert_eq!(
			Geometry::new_path(vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).to_coord_json(),
			json!([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])
		);
	}

	#[test]
	fn debug_format() {
		assert_eq!(
			format!("{:?}", Geometry::new_point([1.0, 2.0, 3.0])),
			"Point([1.0, 2.0, 3.0])"
		);
	}
}
