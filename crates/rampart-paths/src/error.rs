//! Error types for grid access and path requests.

use rampart_core::Coord;
use thiserror::Error;

/// Result type alias using [`GridError`].
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised by [`TileGrid`](crate::TileGrid) operations.
///
/// An unreachable goal is *not* an error: `find_path` reports it with an
/// empty route, and callers retry on a later frame once the map changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate outside the grid was used for indexed access or as a
    /// path endpoint. This is a caller precondition violation and is never
    /// silently clamped.
    #[error("coordinate {coord} outside {width}x{height} grid")]
    OutOfBounds {
        coord: Coord,
        width: i32,
        height: i32,
    },
}
