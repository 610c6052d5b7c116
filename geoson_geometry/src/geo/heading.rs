/// Orientation of the local frame as Euler angles.
///
/// Documents only carry the yaw; roll and pitch are kept at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Euler {
	pub roll: f64,
	pub pitch: f64,
	pub yaw: f64,
}

impl Euler {
	#[must_use]
	pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
		Self { roll, pitch, yaw }
	}

	#[must_use]
	pub fn from_yaw(yaw: f64) -> Self {
		Self::new(0.0, 0.0, yaw)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_yaw_zeroes_roll_and_pitch() {
		assert_eq!(Euler::from_yaw(1.5), Euler::new(0.0, 0.0, 1.5));
	}
}
