use super::parse_geojson_value;
use crate::FeatureCollection;
use anyhow::{Context, Result, anyhow, bail};
use serde_json::{Map, Value, json};
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Imports a GeoJSON file.
pub fn read_geojson_file(path: &Path) -> Result<FeatureCollection> {
	log::debug!("reading {path:?}");
	let file = File::open(path).with_context(|| format!("cannot open {path:?}"))?;
	read_geojson(BufReader::new(file)).with_context(|| format!("failed to read {path:?}"))
}

pub fn read_geojson(mut reader: impl Read) -> Result<FeatureCollection> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	parse_geojson(&buffer)
}

pub fn parse_geojson(json: &str) -> Result<FeatureCollection> {
	let document: Value = serde_json::from_str(json).context("invalid JSON")?;
	parse_geojson_value(document)
}

/// Brings a document into the shape of a `FeatureCollection`.
///
/// A `Feature` is wrapped into a one-feature collection whose properties are the
/// feature's own. Any other type is taken as a bare geometry and wrapped into a
/// one-feature collection with empty feature properties; a `properties` member on the
/// geometry becomes the collection properties.
pub fn normalize_document(document: Value) -> Result<Map<String, Value>> {
	let Value::Object(mut object) = document else {
		bail!("top-level value must be an object")
	};

	let object_type = object
		.get("type")
		.and_then(Value::as_str)
		.ok_or_else(|| anyhow!("top-level object has no string 'type' field"))?
		.to_string();

	match object_type.as_str() {
		"FeatureCollection" => Ok(object),
		"Feature" => {
			let properties = object.get("properties").cloned().unwrap_or(Value::Null);
			Ok(wrap(properties, Value::Object(object)))
		}
		_ => {
			let properties = object.remove("properties").unwrap_or(Value::Null);
			let feature = json!({
				"type": "Feature",
				"geometry": Value::Object(object),
				"properties": {},
			});
			Ok(wrap(properties, feature))
		}
	}
}

fn wrap(properties: Value, feature: Value) -> Map<String, Value> {
	let mut collection = Map::new();
	collection.insert("type".to_string(), Value::from("FeatureCollection"));
	if !properties.is_null() {
		collection.insert("properties".to_string(), properties);
	}
	collection.insert("features".to_string(), Value::Array(vec![feature]));
	collection
}
