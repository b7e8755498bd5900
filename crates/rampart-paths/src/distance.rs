//! Grid distance functions.

use rampart_core::Coord;

/// Manhattan (L1) distance between two tiles.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two tiles.
///
/// This is the heuristic used by [`TileGrid::find_path`](crate::TileGrid::find_path).
/// It is admissible for both cardinal-only and diagonal movement *because*
/// diagonal steps cost the same as cardinal ones (cost is charged per tile
/// entered, not per direction). If a future cost model charges diagonal
/// traversal extra, this heuristic overestimates and must change with it.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
