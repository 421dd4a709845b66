//! Grid coordinates.
//!
//! `x` grows to the right, `y` grows downward. Coordinates are signed so
//! that neighbor arithmetic near the border never underflows; bounds are
//! checked by whoever owns the grid.

use serde::{Deserialize, Serialize};

/// A cell position on the dungeon grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan (taxicab) distance.
    ///
    /// ```
    /// use simple_roguelike::core::Coord;
    ///
    /// assert_eq!(Coord::new(1, 1).manhattan(Coord::new(4, 3)), 5);
    /// ```
    #[must_use]
    pub const fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Euclidean distance, used for the circular vision radius.
    #[must_use]
    pub fn euclidean(self, other: Coord) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// The four orthogonal neighbors (up, down, left, right).
    #[must_use]
    pub const fn orthogonal_neighbors(self) -> [Coord; 4] {
        [
            self.offset(0, -1),
            self.offset(0, 1),
            self.offset(-1, 0),
            self.offset(1, 0),
        ]
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(Coord::new(3, 4).offset(-1, 2), Coord::new(2, 6));
    }

    #[test]
    fn test_manhattan_is_symmetric() {
        let a = Coord::new(-2, 5);
        let b = Coord::new(3, 1);
        assert_eq!(a.manhattan(b), 9);
        assert_eq!(b.manhattan(a), 9);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn test_euclidean() {
        assert!((Coord::new(0, 0).euclidean(Coord::new(3, 4)) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_orthogonal_neighbors() {
        let n = Coord::new(5, 5).orthogonal_neighbors();
        assert!(n.iter().all(|c| c.manhattan(Coord::new(5, 5)) == 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(7, -1)), "(7, -1)");
    }
}
