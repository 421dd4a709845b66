//! Dungeon levels: tiles, carving, population.

pub mod tile;
pub mod game_map;
pub mod dungeon;
pub mod generator;

pub use tile::{Tile, TileGrid};
pub use game_map::GameMap;
pub use dungeon::{DungeonGenerator, Room};
pub use generator::MapGenerator;
