//! Geometry primitives shared by the rampart crates.
//!
//! [`Coord`] is an integer (column, row) pair identifying a tile on a
//! fixed-size map. [`Rect`] is a half-open rectangle of such coordinates,
//! used for grid bounds and for building footprints that block or unblock
//! tiles in bulk.

mod geom;

pub use geom::{Coord, Rect, RectIter};
