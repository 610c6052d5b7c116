use super::{Datum, Enu};

/// WGS84 semi-major axis in meters.
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;

const WGS84_E2: f64 = WGS84_F * (2.0 - WGS84_F);

/// A geodetic position on the WGS84 ellipsoid.
///
/// Constructed latitude first, unlike GeoJSON positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Wgs {
	pub lat: f64,
	pub lon: f64,
	pub alt: f64,
}

impl Wgs {
	#[must_use]
	pub fn new(lat: f64, lon: f64, alt: f64) -> Self {
		Self { lat, lon, alt }
	}

	/// Earth-centered, earth-fixed cartesian coordinates in meters.
	#[must_use]
	pub fn to_ecef(&self) -> [f64; 3] {
		let lat = self.lat.to_radians();
		let lon = self.lon.to_radians();
		let n = WGS84_A / (1.0 - WGS84_E2 * lat.sin().powi(2)).sqrt();

		[
			(n + self.alt) * lat.cos() * lon.cos(),
			(n + self.alt) * lat.cos() * lon.sin(),
			(n * (1.0 - WGS84_E2) + self.alt) * lat.sin(),
		]
	}

	/// Projects the position onto the tangent plane at `datum`.
	#[must_use]
	pub fn to_enu(&self, datum: &Datum) -> Enu {
		let [x, y, z] = self.to_ecef();
		let [x0, y0, z0] = datum.as_wgs().to_ecef();
		let (dx, dy, dz) = (x - x0, y - y0, z - z0);

		let lat = datum.lat.to_radians();
		let lon = datum.lon.to_radians();
		let (sin_lat, cos_lat) = lat.sin_cos();
		let (sin_lon, cos_lon) = lon.sin_cos();

		Enu {
			x: -sin_lon * dx + cos_lon * dy,
			y: -sin_lat * cos_lon * dx - sin_lat * sin_lon * dy + cos_lat * dz,
			z: cos_lat * cos_lon * dx + cos_lat * sin_lon * dy + sin_lat * dz,
		}
	}
}
