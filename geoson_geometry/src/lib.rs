//! Geometry model, coordinate transform and GeoJSON reader/writer of geoson.
//!
//! A document is read into a [`FeatureCollection`] whose features hold one of four
//! shapes ([`Point`], [`Line`], [`Path`], [`Polygon`]) in a local East-North-Up frame.
//!
//! ```no_run
//! use geoson_geometry::{WriteOptions, read_geojson_file, write_geojson_file};
//! use std::path::Path;
//!
//! let collection = read_geojson_file(Path::new("field.geojson")).unwrap();
//! println!("{collection}");
//! write_geojson_file(&collection, Path::new("field.enu.geojson"), &WriteOptions::default()).unwrap();
//! ```

mod geo;
pub mod geojson;
pub mod transform;

pub use geo::*;
pub use geojson::*;
pub use transform::Datum;
