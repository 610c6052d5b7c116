use super::normalize_document;
use crate::{
	Crs, Euler, Feature, FeatureCollection, Geometry, Point, Polygon, Properties,
	transform::{Datum, to_local},
};
use anyhow::{Context, Result, anyhow, bail, ensure};
use serde_json::{Map, Value};

const RESERVED_KEYS: [&str; 3] = ["crs", "datum", "heading"];

/// Frame every position of a document is converted into.
struct Frame {
	crs: Crs,
	datum: Datum,
}

/// Converts a parsed GeoJSON document into a [`FeatureCollection`].
///
/// The top-level `properties` must hold `crs`, `datum` and `heading`; they are
/// validated before any feature is looked at.
pub fn parse_geojson_value(document: Value) -> Result<FeatureCollection> {
	let document = normalize_document(document)?;

	let properties = document
		.get("properties")
		.and_then(Value::as_object)
		.ok_or_else(|| anyhow!("missing top-level 'properties' object"))?;

	let crs = parse_crs(properties)?;
	let datum = parse_datum(properties)?;
	let heading = parse_heading(properties)?;

	let mut collection = FeatureCollection::new(crs, datum, heading);
	collection.global_properties = properties
		.iter()
		.map(|(key, value)| (key.clone(), value_to_text(value)))
		.collect();
	for key in RESERVED_KEYS {
		collection.global_properties.remove(key);
	}

	let frame = Frame { crs, datum };

	let features: &[Value] = match document.get("features") {
		None | Some(Value::Null) => &[],
		Some(Value::Array(features)) => features.as_slice(),
		Some(_) => bail!("'features' must be an array"),
	};

	for (index, feature) in features.iter().enumerate() {
		let feature = feature
			.as_object()
			.ok_or_else(|| anyhow!("feature #{index} is not an object"))?;

		let geometry = match feature.get("geometry") {
			None | Some(Value::Null) => {
				log::debug!("skipping feature #{index} without geometry");
				continue;
			}
			Some(geometry) => geometry,
		};

		let geometries = parse_geometry(geometry, &frame).with_context(|| format!("in feature #{index}"))?;
		let properties = parse_properties(feature.get("properties")).with_context(|| format!("in feature #{index}"))?;
		log::trace!("feature #{index} expands to {} geometries", geometries.len());

		collection.features.extend(
			geometries
				.into_iter()
				.map(|geometry| Feature::with_properties(geometry, properties.clone())),
		);
	}

	log::info!(
		"parsed {} features in {} coordinates",
		collection.features.len(),
		collection.crs
	);

	Ok(collection)
}

fn parse_crs(properties: &Map<String, Value>) -> Result<Crs> {
	let crs = properties
		.get("crs")
		.and_then(Value::as_str)
		.ok_or_else(|| anyhow!("'properties' is missing string 'crs'"))?;
	Crs::from_alias(crs)
}

fn parse_datum(properties: &Map<String, Value>) -> Result<Datum> {
	let values = properties
		.get("datum")
		.and_then(Value::as_array)
		.filter(|values| values.len() >= 3)
		.ok_or_else(|| anyhow!("'properties' is missing array 'datum' of at least 3 numbers"))?;

	let mut numbers = [0.0; 3];
	for (number, value) in numbers.iter_mut().zip(values) {
		*number = value
			.as_f64()
			.ok_or_else(|| anyhow!("'datum' must contain numbers, but found {value}"))?;
	}
	let [lat, lon, alt] = numbers;
	Ok(Datum::new(lat, lon, alt))
}

fn parse_heading(properties: &Map<String, Value>) -> Result<Euler> {
	let yaw = properties
		.get("heading")
		.and_then(Value::as_f64)
		.ok_or_else(|| anyhow!("'properties' is missing numeric 'heading'"))?;
	Ok(Euler::from_yaw(yaw))
}

/// Strings are taken verbatim, every other value as its compact JSON text.
fn value_to_text(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

fn parse_properties(value: Option<&Value>) -> Result<Properties> {
	match value {
		None | Some(Value::Null) => Ok(Properties::new()),
		Some(Value::Object(object)) => Ok(object
			.iter()
			.map(|(key, value)| (key.clone(), value_to_text(value)))
			.collect()),
		Some(other) => bail!("'properties' must be an object, but found {other}"),
	}
}

/// Expands one geometry object into the geometries of the model.
///
/// Multi-geometries and geometry collections yield one geometry per component.
/// Unknown types yield nothing.
fn parse_geometry(geometry: &Value, frame: &Frame) -> Result<Vec<Geometry>> {
	let geometry_type = geometry
		.get("type")
		.and_then(Value::as_str)
		.ok_or_else(|| anyhow!("geometry must have a string 'type'"))?;

	let geometries = match geometry_type {
		"Point" => vec![Geometry::Point(parse_position(coordinates(geometry)?, frame)?)],
		"LineString" => vec![parse_line_string(coordinates(geometry)?, frame)?],
		"Polygon" => vec![Geometry::Polygon(parse_polygon(coordinates(geometry)?, frame)?)],
		"MultiPoint" => as_array(coordinates(geometry)?, "MultiPoint")?
			.iter()
			.map(|position| parse_position(position, frame).map(Geometry::Point))
			.collect::<Result<_>>()?,
		"MultiLineString" => as_array(coordinates(geometry)?, "MultiLineString")?
			.iter()
			.map(|line| parse_line_string(line, frame))
			.collect::<Result<_>>()?,
		"MultiPolygon" => as_array(coordinates(geometry)?, "MultiPolygon")?
			.iter()
			.map(|polygon| parse_polygon(polygon, frame).map(Geometry::Polygon))
			.collect::<Result<_>>()?,
		"GeometryCollection" => {
			let members = geometry
				.get("geometries")
				.ok_or_else(|| anyhow!("GeometryCollection must have 'geometries'"))?;
			let mut geometries = Vec::new();
			for member in as_array(members, "GeometryCollection")? {
				geometries.extend(parse_geometry(member, frame)?);
			}
			geometries
		}
		unknown => {
			log::debug!("ignoring geometry of unknown type '{unknown}'");
			Vec::new()
		}
	};

	Ok(geometries)
}

fn coordinates(geometry: &Value) -> Result<&Value> {
	geometry
		.get("coordinates")
		.ok_or_else(|| anyhow!("geometry must have 'coordinates'"))
}

fn as_array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
	value
		.as_array()
		.ok_or_else(|| anyhow!("coordinates of {what} must be an array, but found {value}"))
}

/// A position is `[x, y]` or `[x, y, z]`; a missing `z` is zero.
fn parse_position(value: &Value, frame: &Frame) -> Result<Point> {
	let values = as_array(value, "a position")?;
	ensure!(values.len() >= 2, "a position needs at least two numbers, but found {value}");

	let mut numbers = [0.0; 3];
	for (number, value) in numbers.iter_mut().zip(values) {
		*number = value
			.as_f64()
			.ok_or_else(|| anyhow!("a position must contain numbers, but found {value}"))?;
	}

	Ok(to_local(numbers, frame.crs, &frame.datum))
}

fn parse_positions(value: &Value, what: &str, frame: &Frame) -> Result<Vec<Point>> {
	as_array(value, what)?
		.iter()
		.map(|position| parse_position(position, frame))
		.collect()
}

fn parse_line_string(value: &Value, frame: &Frame) -> Result<Geometry> {
	Ok(Geometry::from_line_points(parse_positions(value, "LineString", frame)?))
}

/// Only the first ring is kept, holes are dropped.
fn parse_polygon(value: &Value, frame: &Frame) -> Result<Polygon> {
	match as_array(value, "Polygon")?.first() {
		Some(ring) => Ok(Polygon::new(parse_positions(ring, "a ring", frame)?)),
		None => Ok(Polygon::default()),
	}
}
