//! Memory of cells the player has seen at least once.

use serde::{Deserialize, Serialize};

use super::shadowcast::FovMap;
use crate::core::Coord;
use crate::map::tile::cell_count;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploredMap {
    width: i32,
    height: i32,
    seen: Vec<bool>,
}

impl ExploredMap {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            seen: vec![false; cell_count(width, height)],
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

    /// Storage holds exactly one flag per cell.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.width >= 0 && self.height >= 0 && self.seen.len() == cell_count(self.width, self.height)
    }

    /// Remember everything currently lit.
    pub fn reveal(&mut self, fov: &FovMap) {
        for coord in fov.visible_coords() {
            if let Some(i) = self.index(coord) {
                self.seen[i] = true;
            }
        }
    }

    #[must_use]
    pub fn is_explored(&self, coord: Coord) -> bool {
        self.index(coord).is_some_and(|i| self.seen[i])
    }

    /// Number of explored cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.seen.iter().filter(|&&s| s).count()
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height)
            .then(|| coord.x as usize * self.height as usize + coord.y as usize)
    }
}
