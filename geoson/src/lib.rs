//! # geoson
//!
//! geoson converts GeoJSON feature collections into a geometry model in a local
//! East-North-Up frame and writes that model back as GeoJSON.
//!
//! ## Supported input
//! - a `FeatureCollection`, a single `Feature` or a bare geometry
//! - `crs` of `EPSG:4326`, `WGS84`, `WGS` (projected around the datum) or `ENU`, `ECEF` (taken as is)
//! - `Point`, `LineString`, `Polygon`, their `Multi*` variants and `GeometryCollection`
//!
//! ## Usage Example
//!
//! ```rust
//! use geoson::geometry::{parse_geojson, Geometry};
//!
//! let collection = parse_geojson(
//!     r#"{
//!         "type": "Point",
//!         "coordinates": [0, 0, 0],
//!         "properties": { "crs": "EPSG:4326", "datum": [0, 0, 0], "heading": 0 }
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(collection.features.len(), 1);
//! assert!(matches!(collection.features[0].geometry, Geometry::Point(_)));
//! ```

pub use geoson_geometry as geometry;
