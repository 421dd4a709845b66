//! Recursive shadowcasting field of view.
//!
//! Each of the eight octants is scanned row by row outward from the
//! origin, tracking the slope interval that is still unobstructed. Opaque
//! cells are lit when reached but narrow the interval for later rows.
//!
//! Light falls off linearly: a cell at Euclidean distance `d` receives
//! `1 - d / radius`, so the rim at `d >= radius` is dark.

use serde::{Deserialize, Serialize};

use crate::core::Coord;
use crate::map::tile::cell_count;
use crate::map::TileGrid;

/// Octant transforms `(xx, xy, yx, yy)`.
const OCTANTS: [(i32, i32, i32, i32); 8] = [
    (1, 0, 0, 1),
    (0, 1, 1, 0),
    (0, -1, 1, 0),
    (-1, 0, 0, 1),
    (-1, 0, 0, -1),
    (0, -1, -1, 0),
    (0, 1, -1, 0),
    (1, 0, 0, -1),
];

/// Per-cell light levels in `[0, 1]` from the last computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FovMap {
    width: i32,
    height: i32,
    light: Vec<f64>,
}

impl FovMap {
    /// A fully dark map.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            light: vec![0.0; cell_count(width, height)],
        }
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height)
            .then(|| coord.x as usize * self.height as usize + coord.y as usize)
    }

    /// Light level at `coord`; 0 outside the map.
    #[must_use]
    pub fn light(&self, coord: Coord) -> f64 {
        self.index(coord).map_or(0.0, |i| self.light[i])
    }

    #[must_use]
    pub fn is_visible(&self, coord: Coord) -> bool {
        self.light(coord) > 0.0
    }

    /// Every lit coordinate.
    pub fn visible_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let h = self.height.max(1) as usize;
        self.light
            .iter()
            .enumerate()
            .filter(|(_, &l)| l > 0.0)
            .map(move |(i, _)| Coord::new((i / h) as i32, (i % h) as i32))
    }

    /// Recompute in place, reusing the buffer.
    ///
    /// The buffer is resized if the grid dimensions changed.
    pub fn compute(&mut self, grid: &TileGrid, origin: Coord, radius: u32) {
        if self.width != grid.width() || self.height != grid.height() {
            *self = Self::new(grid.width(), grid.height());
        } else {
            self.light.fill(0.0);
        }

        let Some(origin_index) = self.index(origin) else {
            return;
        };
        self.light[origin_index] = 1.0;
        if radius == 0 {
            return;
        }

        for &(xx, xy, yx, yy) in &OCTANTS {
            let octant = Octant {
                grid,
                origin,
                radius: f64::from(radius),
                max_row: radius as i32,
                xx,
                xy,
                yx,
                yy,
            };
            octant.cast(self, 1, 1.0, 0.0);
        }
    }

    fn illuminate(&mut self, coord: Coord, level: f64) {
        if let Some(i) = self.index(coord) {
            if level > self.light[i] {
                self.light[i] = level;
            }
        }
    }
}

struct Octant<'a> {
    grid: &'a TileGrid,
    origin: Coord,
    radius: f64,
    max_row: i32,
    xx: i32,
    xy: i32,
    yx: i32,
    yy: i32,
}

impl Octant<'_> {
    fn cast(&self, fov: &mut FovMap, row: i32, mut start: f64, end: f64) {
        if start < end {
            return;
        }
        let mut new_start = 0.0;

        for distance in row..=self.max_row {
            let dy = -distance;
            let mut blocked = false;

            for dx in -distance..=0 {
                let left_slope = (f64::from(dx) - 0.5) / (f64::from(dy) + 0.5);
                let right_slope = (f64::from(dx) + 0.5) / (f64::from(dy) - 0.5);
                if start < right_slope {
                    continue;
                }
                if end > left_slope {
                    break;
                }

                let cell = Coord::new(
                    self.origin.x + dx * self.xx + dy * self.xy,
                    self.origin.y + dx * self.yx + dy * self.yy,
                );
                let d = f64::from(dx).hypot(f64::from(dy));
                if d < self.radius {
                    fov.illuminate(cell, 1.0 - d / self.radius);
                }

                let opaque = self.grid.is_opaque(cell);
                if blocked {
                    if opaque {
                        new_start = right_slope;
                    } else {
                        blocked = false;
                        start = new_start;
                    }
                } else if opaque && distance < self.max_row {
                    blocked = true;
                    self.cast(fov, distance + 1, start, left_slope);
                    new_start = right_slope;
                }
            }

            if blocked {
                break;
            }
        }
    }
}

/// Compute a fresh field of view.
#[must_use]
pub fn compute_fov(grid: &TileGrid, origin: Coord, radius: u32) -> FovMap {
    let mut fov = FovMap::new(grid.width(), grid.height());
    fov.compute(grid, origin, radius);
    fov
}
