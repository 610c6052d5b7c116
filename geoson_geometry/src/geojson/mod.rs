//! Reading and writing GeoJSON documents.
//!
//! The reader accepts a `FeatureCollection`, a single `Feature` or a bare geometry and
//! converts every position into the local frame. The writer always emits a
//! `FeatureCollection` in local coordinates.

mod parse;
mod read;
mod write;

pub use parse::*;
pub use read::*;
pub use write::*;
