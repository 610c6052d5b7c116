use super::*;
use crate::transform::Datum;
use std::{collections::BTreeMap, fmt::Display};

/// The root aggregate of a document: features plus the frame they live in.
///
/// `global_properties` holds every top-level property of an imported document except
/// `crs`, `datum` and `heading`. They are not written back on export.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureCollection {
	pub crs: Crs,
	pub datum: Datum,
	pub heading: Euler,
	pub features: Vec<Feature>,
	pub global_properties: Properties,
}

impl FeatureCollection {
	pub fn new(crs: Crs, datum: Datum, heading: Euler) -> Self {
		Self {
			crs,
			datum,
			heading,
			features: Vec::new(),
			global_properties: Properties::new(),
		}
	}

	pub fn with_features(mut self, features: Vec<Feature>) -> Self {
		self.features = features;
		self
	}

	/// Number of features per geometry kind, keyed by [`Geometry::type_name`].
	pub fn count_by_type(&self) -> BTreeMap<&'static str, usize> {
		let mut counts = BTreeMap::new();
		for feature in &self.features {
			*counts.entry(feature.geometry.type_name()).or_insert(0) += 1;
		}
		counts
	}
}

impl Display for FeatureCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "CRS: {}", self.crs)?;
		writeln!(f, "DATUM: {}, {}, {}", self.datum.lat, self.datum.lon, self.datum.alt)?;
		writeln!(f, "HEADING: {}", self.heading.yaw)?;
		writeln!(f, "FEATURES: {}", self.features.len())?;
		for feature in &self.features {
			writeln!(f, "  {}", feature.geometry.type_name().to_uppercase())?;
			if !feature.properties.is_empty() {
				writeln!(f, "    PROPS: {}", feature.properties.len())?;
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn example() -> FeatureCollection {
		FeatureCollection::new(Crs::Enu, Datum::new(52.0, 5.0, 1.5), Euler::from_yaw(90.0)).with_features(vec![
			Feature::new_example(),
			Feature::new(Geometry::new_point([1.0, 2.0, 0.0])),
			Feature::new(Geometry::new_point([3.0, 4.0, 0.0])),
		])
	}

	#[test]
	fn count_by_type() {
		let counts = example().count_by_type();
		assert_eq!(counts.get("Polygon"), Some(&1));
		assert_eq!(counts.get("Point"), Some(&2));
		assert_eq!(counts.get("Line"), None);
	}

	#[test]
	fn display_summary() {
		assert_eq!(
			example().to_string(),
			"CRS: ENU\nDATUM: 52, 5, 1.5\nHEADING: 90\nFEATURES: 3\n  POLYGON\n    PROPS: 2\n  POINT\n  POINT\n"
		);
	}
}
