mod collection;
mod crs;
mod feature;
mod geometry;
mod heading;
mod properties;
mod types;

pub use collection::*;
pub use crs::*;
pub use feature::*;
pub use geometry::*;
pub use heading::*;
pub use properties::*;
pub use types::*;
