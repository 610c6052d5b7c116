//! Conversion of document positions into the local frame.
//!
//! GeoJSON positions are longitude first, while [`Wgs`] and [`Datum`] are latitude first.
//! [`to_local`] is the only place where the axes are swapped.

mod datum;
mod enu;
mod wgs;

pub use datum::*;
pub use enu::*;
pub use wgs::*;

use crate::{Crs, Point};

/// Converts one document position into a local point.
///
/// `coords` is `[lon, lat, alt]` for [`Crs::Wgs`] and `[x, y, z]` for [`Crs::Enu`].
/// Local positions pass through unchanged.
#[must_use]
pub fn to_local(coords: [f64; 3], crs: Crs, datum: &Datum) -> Point {
	match crs {
		Crs::Enu => Point::from(coords),
		Crs::Wgs => {
			let [lon, lat, alt] = coords;
			Point::from(Wgs::new(lat, lon, alt).to_enu(datum))
		}
	}
}
