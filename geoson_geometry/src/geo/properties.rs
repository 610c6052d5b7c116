use serde_json::{Map, Value};
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// Attribute mapping of a feature or a collection.
///
/// All values are text: the reader coerces every non-string JSON value to its JSON
/// text before it lands here.
#[derive(Clone, Default, PartialEq)]
pub struct Properties {
	properties: BTreeMap<String, String>,
}

impl Properties {
	pub fn new() -> Properties {
		Properties {
			properties: BTreeMap::new(),
		}
	}
	pub fn insert(&mut self, key: String, value: String) {
		self.properties.insert(key, value);
	}
	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.properties.remove(key)
	}
	pub fn get(&self, key: &str) -> Option<&str> {
		self.properties.get(key).map(String::as_str)
	}
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
		self.properties.iter()
	}

	/// Returns the mapping as a JSON object of strings.
	pub fn to_json(&self) -> Value {
		Value::Object(
			self
				.properties
				.iter()
				.map(|(k, v)| (k.clone(), Value::String(v.clone())))
				.collect::<Map<String, Value>>(),
		)
	}
}

impl IntoIterator for Properties {
	type Item = (String, String);
	type IntoIter = btree_map::IntoIter<String, String>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl<'a> IntoIterator for &'a Properties {
	type Item = (&'a String, &'a String);
	type IntoIter = btree_map::Iter<'a, String, String>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.iter()
	}
}

impl From<Vec<(&str, &str)>> for Properties {
	fn from(value: Vec<(&str, &str)>) -> Self {
		Properties {
			properties: value.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
		}
	}
}

impl FromIterator<(String, String)> for Properties {
	fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
		Properties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for Properties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}
