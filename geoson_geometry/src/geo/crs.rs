use anyhow::{Result, bail};
use std::{fmt::Display, str::FromStr};

/// Coordinate system of the positions in a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Crs {
	/// Geodetic WGS84 positions `(lon, lat, alt)`, projected to the local frame on import.
	#[default]
	Wgs,
	/// Positions already in the local East-North-Up frame.
	Enu,
}

impl Crs {
	/// Resolves a `crs` string of a document.
	///
	/// Case and surrounding whitespace are ignored.
	pub fn from_alias(alias: &str) -> Result<Self> {
		Ok(match alias.to_lowercase().trim() {
			"epsg:4326" | "wgs84" | "wgs" => Crs::Wgs,
			"enu" | "ecef" => Crs::Enu,
			_ => bail!("unknown crs '{alias}', expected one of EPSG:4326, WGS84, WGS, ENU, ECEF"),
		})
	}

	/// The name written on export. Narrower than the set of accepted aliases.
	pub fn canonical_name(&self) -> &'static str {
		match self {
			Crs::Wgs => "EPSG:4326",
			Crs::Enu => "ENU",
		}
	}
}

impl FromStr for Crs {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		Crs::from_alias(s)
	}
}

impl Display for Crs {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.canonical_name())
	}
}
