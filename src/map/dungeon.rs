//! Rooms-and-corridors dungeon carving.
//!
//! Rooms are rectangles placed at random, rejected if they touch an
//! existing room. Each accepted room is joined to the previous one by an
//! L-shaped corridor, so the floor is always one connected region. The
//! outermost ring of cells is never carved.

use log::debug;

use super::tile::{Tile, TileGrid};
use crate::core::config::check_dimensions;
use crate::core::{Coord, GameRng, Result};

/// Axis-aligned room, `x2`/`y2` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Room {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    #[must_use]
    pub const fn center(&self) -> Coord {
        Coord::new((self.x1 + self.x2 - 1) / 2, (self.y1 + self.y2 - 1) / 2)
    }

    /// Overlap test with a one-cell wall margin between rooms.
    #[must_use]
    pub const fn touches(&self, other: &Room) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }
}

/// Dungeon carving parameters.
#[derive(Clone, Debug)]
pub struct DungeonGenerator {
    max_rooms: usize,
    placement_attempts: usize,
    min_room_size: i32,
    max_room_size: i32,
}

impl Default for DungeonGenerator {
    fn default() -> Self {
        Self {
            max_rooms: 30,
            placement_attempts: 200,
            min_room_size: 3,
            max_room_size: 10,
        }
    }
}

impl DungeonGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_rooms(mut self, count: usize) -> Self {
        self.max_rooms = count.max(1);
        self
    }

    pub fn room_size(mut self, min: i32, max: i32) -> Self {
        self.min_room_size = min.max(1);
        self.max_room_size = max.max(self.min_room_size);
        self
    }

    /// Carve a dungeon into a solid `width × height` block of wall.
    pub fn generate(&self, width: i32, height: i32, rng: &mut GameRng) -> Result<TileGrid> {
        check_dimensions(width, height)?;

        let mut grid = TileGrid::filled(width, height, Tile::Wall);
        let rooms = self.place_rooms(width, height, rng);

        for (i, room) in rooms.iter().enumerate() {
            carve_room(&mut grid, room);
            if i > 0 {
                let from = rooms[i - 1].center();
                let to = room.center();
                if rng.gen_bool(0.5) {
                    carve_horizontal(&mut grid, from.x, to.x, from.y);
                    carve_vertical(&mut grid, from.y, to.y, to.x);
                } else {
                    carve_vertical(&mut grid, from.y, to.y, from.x);
                    carve_horizontal(&mut grid, from.x, to.x, to.y);
                }
            }
        }

        debug!("Carved {} rooms into {}x{} dungeon", rooms.len(), width, height);
        Ok(grid)
    }

    fn place_rooms(&self, width: i32, height: i32, rng: &mut GameRng) -> Vec<Room> {
        // Interior excludes the border ring.
        let inner_w = width - 2;
        let inner_h = height - 2;
        let max_w = self.max_room_size.min(inner_w);
        let max_h = self.max_room_size.min(inner_h);
        let min_w = self.min_room_size.min(max_w);
        let min_h = self.min_room_size.min(max_h);

        let mut rooms: Vec<Room> = Vec::new();
        for _ in 0..self.placement_attempts {
            if rooms.len() >= self.max_rooms {
                break;
            }
            let w = rng.gen_range(min_w..max_w + 1);
            let h = rng.gen_range(min_h..max_h + 1);
            let x = rng.gen_range(1..width - w);
            let y = rng.gen_range(1..height - h);
            let room = Room::new(x, y, w, h);

            if rooms.iter().any(|r| r.touches(&room)) {
                continue;
            }
            rooms.push(room);
        }

        if rooms.is_empty() {
            rooms.push(Room::new(1, 1, inner_w, inner_h));
        }
        rooms
    }
}

fn carve_room(grid: &mut TileGrid, room: &Room) {
    for x in room.x1..room.x2 {
        for y in room.y1..room.y2 {
            grid.set(Coord::new(x, y), Tile::Floor);
        }
    }
}

fn carve_horizontal(grid: &mut TileGrid, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        grid.set(Coord::new(x, y), Tile::Floor);
    }
}

fn carve_vertical(grid: &mut TileGrid, y1: i32, y2: i32, x: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        grid.set(Coord::new(x, y), Tile::Floor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameError;

    #[test]
    fn test_room_center_and_touch() {
        let a = Room::new(1, 1, 3, 3);
        assert_eq!(a.center(), Coord::new(2, 2));

        let adjacent = Room::new(4, 1, 3, 3);
        let apart = Room::new(5, 1, 3, 3);
        assert!(a.touches(&adjacent));
        assert!(!a.touches(&apart));
    }

    #[test]
    fn test_rejects_tiny_map() {
        let mut rng = GameRng::new(1);
        let err = DungeonGenerator::new().generate(4, 10, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::InvalidDimensions { .. }));

        let err = DungeonGenerator::new().generate(10, 50_000, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::InvalidDimensions { height: 50_000, .. }));
    }

    #[test]
    fn test_border_is_wall() {
        let mut rng = GameRng::new(3);
        let grid = DungeonGenerator::new().generate(30, 20, &mut rng).unwrap();
        for x in 0..30 {
            assert_eq!(grid.tile(Coord::new(x, 0)), Some(Tile::Wall));
            assert_eq!(grid.tile(Coord::new(x, 19)), Some(Tile::Wall));
        }
        for y in 0..20 {
            assert_eq!(grid.tile(Coord::new(0, y)), Some(Tile::Wall));
            assert_eq!(grid.tile(Coord::new(29, y)), Some(Tile::Wall));
        }
    }

    #[test]
    fn test_minimum_map_has_floor() {
        let mut rng = GameRng::new(11);
        let grid = DungeonGenerator::new().generate(5, 5, &mut rng).unwrap();
        assert_eq!(grid.floor_coords().len(), 9);
    }

    #[test]
    fn test_single_fixed_room() {
        let gen = DungeonGenerator::new().max_rooms(1).room_size(3, 3);
        for seed in 0..10 {
            let grid = gen.generate(20, 20, &mut GameRng::new(seed)).unwrap();
            assert_eq!(grid.floor_coords().len(), 9);
        }
    }

    #[test]
    fn test_builders_clamp() {
        let gen = DungeonGenerator::new().max_rooms(0).room_size(6, 2);
        assert_eq!(gen.max_rooms, 1);
        assert_eq!((gen.min_room_size, gen.max_room_size), (6, 6));
    }

    #[test]
    fn test_same_seed_same_dungeon() {
        let gen = DungeonGenerator::new();
        let a = gen.generate(40, 25, &mut GameRng::new(77)).unwrap();
        let b = gen.generate(40, 25, &mut GameRng::new(77)).unwrap();
        assert_eq!(a, b);
    }
}
