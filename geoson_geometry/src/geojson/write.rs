use crate::{Feature, FeatureCollection, Geometry};
use anyhow::{Context, Result, ensure};
use serde::Serialize;
use serde_json::{Map, Value, json, ser::PrettyFormatter};
use std::{
	io::{BufWriter, Write},
	path::Path,
};
use tempfile::NamedTempFile;

/// Settings of the GeoJSON writer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOptions {
	/// Number of spaces per indentation level.
	pub indent: usize,
}

impl Default for WriteOptions {
	fn default() -> Self {
		Self { indent: 2 }
	}
}

/// JSON has no representation for NaN or infinity.
fn ensure_finite(numbers: &[f64], what: &str) -> Result<()> {
	ensure!(
		numbers.iter().all(|number| number.is_finite()),
		"{what} must be finite numbers, but found {numbers:?}"
	);
	Ok(())
}

pub fn geometry_to_json(geometry: &Geometry) -> Result<Value> {
	for point in geometry.points() {
		ensure_finite(&[point.x, point.y, point.z], "coordinates")?;
	}
	Ok(json!({
		"type": geometry.geojson_type(),
		"coordinates": geometry.to_coord_json(),
	}))
}

pub fn feature_to_json(feature: &Feature) -> Result<Value> {
	Ok(json!({
		"type": "Feature",
		"properties": feature.properties.to_json(),
		"geometry": geometry_to_json(&feature.geometry)?,
	}))
}

/// Builds the document of a collection.
///
/// Only `crs`, `datum` and `heading` are written as top-level properties: global
/// properties of an imported document are dropped. Coordinates stay in the local
/// frame even for [`crate::Crs::Wgs`] collections.
///
/// Fails if any number of the document is NaN or infinite.
pub fn feature_collection_to_json(collection: &FeatureCollection) -> Result<Value> {
	let datum = [collection.datum.lat, collection.datum.lon, collection.datum.alt];
	ensure_finite(&datum, "'datum'")?;
	ensure_finite(&[collection.heading.yaw], "'heading'")?;

	let mut properties = Map::new();
	properties.insert("crs".to_string(), Value::from(collection.crs.canonical_name()));
	properties.insert("datum".to_string(), json!(datum));
	properties.insert("heading".to_string(), json!(collection.heading.yaw));

	let features = collection
		.features
		.iter()
		.enumerate()
		.map(|(index, feature)| feature_to_json(feature).with_context(|| format!("in feature #{index}")))
		.collect::<Result<Vec<_>>>()?;

	Ok(json!({
		"type": "FeatureCollection",
		"properties": properties,
		"features": features,
	}))
}

/// Writes the pretty-printed document followed by a newline.
pub fn write_geojson(collection: &FeatureCollection, mut writer: impl Write, options: &WriteOptions) -> Result<()> {
	let document = feature_collection_to_json(collection)?;
	let indent = " ".repeat(options.indent);
	let mut serializer = serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(indent.as_bytes()));
	document.serialize(&mut serializer)?;
	writer.write_all(b"\n")?;
	writer.flush()?;
	Ok(())
}

/// Exports a collection to `path`.
///
/// The document is written to a temporary file next to `path`, which replaces `path`
/// only once everything was written.
pub fn write_geojson_file(collection: &FeatureCollection, path: &Path, options: &WriteOptions) -> Result<()> {
	log::debug!("writing {} features to {path:?}", collection.features.len());

	let directory = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	let mut file = NamedTempFile::new_in(directory).with_context(|| format!("cannot open {path:?} for writing"))?;

	write_geojson(collection, BufWriter::new(&mut file), options).with_context(|| format!("failed to write {path:?}"))?;
	file
		.as_file()
		.sync_all()
		.with_context(|| format!("failed to write {path:?}"))?;
	file
		.persist(path)
		.with_context(|| format!("cannot replace {path:?}"))?;

	log::info!("wrote {} features to {path:?}", collection.features.len());
	Ok(())
}
