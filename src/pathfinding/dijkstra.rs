//! Dijkstra distance maps.
//!
//! Every passable cell stores its step distance to the nearest goal.
//! Movement is 4-connected with unit cost, so the scan is a multi-source
//! breadth-first search. Following strictly decreasing distances from any
//! reachable cell walks a shortest path to a goal.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::core::Coord;
use crate::map::TileGrid;

/// Distance value for cells that cannot reach any goal.
pub const UNREACHABLE: u32 = u32::MAX;

/// Source of movement paths for AI.
///
/// Production code uses `DijkstraMap`; tests substitute scripted paths.
pub trait PathFinder {
    /// Up to `max_steps` cells leading from `from` toward the goal.
    ///
    /// Excludes `from` itself. Empty when no progress is possible.
    fn find_path(&mut self, from: Coord, max_steps: usize) -> Vec<Coord>;
}

/// Goal-distance field over a tile grid.
#[derive(Clone, Debug)]
pub struct DijkstraMap {
    width: i32,
    height: i32,
    passable: Vec<bool>,
    goals: SmallVec<[Coord; 4]>,
    distances: Vec<u32>,
    dirty: bool,
}

impl DijkstraMap {
    /// Build from a grid; walls are impassable.
    #[must_use]
    pub fn from_grid(grid: &TileGrid) -> Self {
        let width = grid.width();
        let height = grid.height();
        let passable: Vec<bool> = (0..grid.len())
            .map(|i| grid.is_walkable(grid.coord_of(i)))
            .collect();
        Self {
            width,
            height,
            distances: vec![UNREACHABLE; passable.len()],
            passable,
            goals: SmallVec::new(),
            dirty: true,
        }
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height)
            .then(|| coord.x as usize * self.height as usize + coord.y as usize)
    }

    /// Add a goal cell. Impassable or out-of-bounds goals are ignored.
    pub fn set_goal(&mut self, goal: Coord) {
        if self.index(goal).is_some_and(|i| self.passable[i]) {
            self.goals.push(goal);
            self.dirty = true;
        }
    }

    pub fn clear_goals(&mut self) {
        self.goals.clear();
        self.dirty = true;
    }

    #[must_use]
    pub fn goals(&self) -> &[Coord] {
        &self.goals
    }

    /// Recompute distances from the current goals.
    pub fn scan(&mut self) {
        self.distances.fill(UNREACHABLE);
        let mut frontier = VecDeque::new();

        for &goal in &self.goals {
            if let Some(i) = self.index(goal) {
                self.distances[i] = 0;
                frontier.push_back(goal);
            }
        }

        while let Some(cell) = frontier.pop_front() {
            let Some(ci) = self.index(cell) else { continue };
            let next = self.distances[ci] + 1;
            for neighbor in cell.orthogonal_neighbors() {
                if let Some(ni) = self.index(neighbor) {
                    if self.passable[ni] && self.distances[ni] > next {
                        self.distances[ni] = next;
                        frontier.push_back(neighbor);
                    }
                }
            }
        }

        self.dirty = false;
    }

    /// Steps from `coord` to the nearest goal, as of the last scan.
    #[must_use]
    pub fn distance(&self, coord: Coord) -> Option<u32> {
        self.index(coord)
            .map(|i| self.distances[i])
            .filter(|&d| d != UNREACHABLE)
    }

    /// Neighbor of `cell` with the smallest distance below `current`.
    /// Ties keep the first neighbor in up, down, left, right order.
    fn best_step(&self, cell: Coord, current: u32) -> Option<(Coord, u32)> {
        let mut best: Option<(Coord, u32)> = None;
        for neighbor in cell.orthogonal_neighbors() {
            if let Some(d) = self.distance(neighbor) {
                if d < current && best.map_or(true, |(_, b)| d < b) {
                    best = Some((neighbor, d));
                }
            }
        }
        best
    }
}

impl PathFinder for DijkstraMap {
    fn find_path(&mut self, from: Coord, max_steps: usize) -> Vec<Coord> {
        if self.dirty {
            self.scan();
        }

        let mut path = Vec::new();
        let Some(mut current) = self.distance(from) else {
            return path;
        };
        let mut cell = from;

        while path.len() < max_steps && current > 0 {
            match self.best_step(cell, current) {
                Some((next, d)) => {
                    path.push(next);
                    cell = next;
                    current = d;
                }
                None => break,
            }
        }
        path
    }
}
