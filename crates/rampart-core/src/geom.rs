//! Tile coordinates and rectangles.
//!
//! X grows right (columns), Y grows down (rows), matching the map layout
//! of the game grid.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A tile coordinate: `x` is the column, `y` is the row.
///
/// A coordinate is valid for a grid of size `width x height` iff
/// `0 <= x < width` and `0 <= y < height`. Signed components let neighbor
/// arithmetic step outside the grid before bounds filtering rejects it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a coordinate shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    /// Row-major order: by row first, then by column.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max): `min` inclusive, `max` exclusive.
///
/// Used for grid bounds and for building footprints. All empty rectangles
/// compare equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Coord,
    pub max: Coord,
}

impl PartialEq for Rect {
    /// Two rectangles are equal if they describe the same set of tiles;
    /// all empty rectangles are considered equal.
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Rect {}

impl Rect {
    /// Create a rectangle from two corners, canonicalized so that
    /// `min <= max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Coord::new(x0.min(x1), y0.min(y1)),
            max: Coord::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Rectangle at `origin` with the given size.
    #[inline]
    pub fn sized(origin: Coord, width: i32, height: i32) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of tiles covered.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the rectangle has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `c` lies inside the half-open rectangle.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.x >= self.min.x && c.x < self.max.x && c.y >= self.min.y && c.y < self.max.y
    }

    /// Intersection of two rectangles; the empty rectangle if they do not
    /// overlap.
    #[inline]
    pub fn intersect(self, other: Rect) -> Self {
        let r = Self {
            min: Coord::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Coord::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Row-major iterator over every coordinate in the rectangle.
    #[inline]
    pub fn iter(self) -> RectIter {
        RectIter {
            rect: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Rect {
    type Item = Coord;
    type IntoIter = RectIter;
    #[inline]
    fn into_iter(self) -> RectIter {
        self.iter()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the coordinates of a [`Rect`].
#[derive(Clone, Debug)]
pub struct RectIter {
    rect: Rect,
    cur: Coord,
}

impl Iterator for RectIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.rect.is_empty() || self.cur.y >= self.rect.max.y {
            return None;
        }
        let c = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.rect.max.x {
            self.cur.x = self.rect.min.x;
            self.cur.y += 1;
        }
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rect.is_empty() || self.cur.y >= self.rect.max.y {
            return (0, Some(0));
        }
        let remaining_rows = (self.rect.max.y - self.cur.y - 1) as usize;
        let n = remaining_rows * self.rect.width() as usize
            + (self.rect.max.x - self.cur.x) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RectIter {}
