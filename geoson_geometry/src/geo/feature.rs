use super::*;

/// One geometry together with its attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
	pub geometry: Geometry,
	pub properties: Properties,
}

impl Feature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			geometry,
			properties: Properties::new(),
		}
	}

	pub fn with_properties(geometry: Geometry, properties: Properties) -> Self {
		Self { geometry, properties }
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			geometry: Geometry::new_example(),
			properties: Properties::from(vec![("name", "Field 7"), ("crop", "wheat")]),
		}
	}
}
