use predicates::str;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_utilities::*;

#[test]
fn convert_enu_round_trip() {
	let input = get_testdata("field_enu.geojson");
	let (_temp_dir, output) = get_temp_output("field.geojson");

	geoson_convert(&input, &output)
		.assert()
		.success()
		.stdout(str::is_empty());

	let document = read_output_json(&output);
	assert_eq!(
		document["properties"],
		json!({ "crs": "ENU", "datum": [52.0, 5.0, 0.0], "heading": 90.0 })
	);

	let features = document["features"].as_array().unwrap();
	let summary = features
		.iter()
		.map(|f| {
			(
				f["geometry"]["type"].as_str().unwrap().to_string(),
				f["geometry"]["coordinates"].clone(),
				f["properties"]["name"].as_str().unwrap().to_string(),
			)
		})
		.collect::<Vec<_>>();

	assert_eq!(
		summary,
		vec![
			("Point".to_string(), json!([0.0, 0.0, 0.0]), "base".to_string()),
			(
				"LineString".to_string(),
				json!([[0.0, 0.0, 0.0], [50.0, 0.0, 0.0]]),
				"row 1".to_string()
			),
			(
				"LineString".to_string(),
				json!([[0.0, 0.0, 0.0], [0.0, 25.0, 0.0], [50.0, 25.0, 0.5]]),
				"headland".to_string()
			),
			(
				"Polygon".to_string(),
				json!([[[0.0, 0.0, 0.0], [50.0, 0.0, 0.0], [50.0, 25.0, 0.0], [0.0, 25.0, 0.0], [0.0, 0.0, 0.0]]]),
				"plot".to_string()
			),
			("Point".to_string(), json!([10.0, 10.0, 0.0]), "obstacles".to_string()),
			(
				"LineString".to_string(),
				json!([[20.0, 5.0, 0.0], [22.0, 6.0, 0.0], [24.0, 5.0, 0.0]]),
				"obstacles".to_string()
			),
		]
	);
}

#[test]
fn convert_wgs_writes_local_coordinates() {
	let input = get_testdata("field_wgs84.geojson");
	let (_temp_dir, output) = get_temp_output("field.geojson");

	geoson_convert(&input, &output).args(["--indent", "4"]).assert().success();

	let text = std::fs::read_to_string(&output).unwrap();
	assert!(text.starts_with("{\n    \"features\""), "{text}");

	let document = read_output_json(&output);
	assert_eq!(document["properties"]["crs"], json!("EPSG:4326"));
	assert_eq!(document["properties"].as_object().unwrap().len(), 3);

	let features = document["features"].as_array().unwrap();
	assert_eq!(features.len(), 5);

	// the gate sits on the datum
	let gate = &features[0]["geometry"]["coordinates"];
	for value in gate.as_array().unwrap() {
		assert!(value.as_f64().unwrap().abs() < 1e-6, "{gate}");
	}

	// the fence runs about 69 m east
	let fence_end = &features[1]["geometry"]["coordinates"][1];
	let east = fence_end[0].as_f64().unwrap();
	assert!(east > 60.0 && east < 70.0, "{fence_end}");
	assert_eq!(features[1]["properties"]["height"], json!("1.2"));

	// the polygon hole is dropped
	assert_eq!(features[4]["geometry"]["coordinates"].as_array().unwrap().len(), 1);
	assert_eq!(features[4]["geometry"]["coordinates"][0].as_array().unwrap().len(), 5);
}

#[test]
fn convert_fails_without_datum() {
	let input = get_testdata("missing_datum.geojson");
	let (_temp_dir, output) = get_temp_output("out.geojson");

	geoson_convert(&input, &output)
		.assert()
		.failure()
		.stderr(str::contains("'properties' is missing array 'datum'"));

	assert!(!output.exists());
}
