// The four leaf shapes of the geometry model. Every shape implements `GeometryTrait`,
// which gives uniform access to its points and its GeoJSON coordinates.

mod line;
mod macros;
mod path;
mod point;
mod polygon;
mod traits;

pub use line::*;
pub use path::*;
pub use point::*;
pub use polygon::*;
pub use traits::*;
