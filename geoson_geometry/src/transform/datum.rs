use super::Wgs;

/// Origin of the local East-North-Up frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Datum {
	/// Latitude in degrees.
	pub lat: f64,
	/// Longitude in degrees.
	pub lon: f64,
	/// Altitude above the ellipsoid in meters.
	pub alt: f64,
}

impl Datum {
	#[must_use]
	pub fn new(lat: f64, lon: f64, alt: f64) -> Self {
		Self { lat, lon, alt }
	}

	/// The datum as a geodetic position.
	#[must_use]
	pub fn as_wgs(&self) -> Wgs {
		Wgs::new(self.lat, self.lon, self.alt)
	}
}
