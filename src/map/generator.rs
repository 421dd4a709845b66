//! Level generation: carve a dungeon, then populate it.

use log::info;

use super::dungeon::DungeonGenerator;
use super::game_map::GameMap;
use crate::core::{Coord, EntityAllocator, GameError, GameRng, Result};
use crate::entities::{Enemy, Item, Player};

/// Builds complete levels with the player, enemies and potions placed on
/// distinct floor cells.
#[derive(Clone, Debug, Default)]
pub struct MapGenerator {
    dungeon: DungeonGenerator,
}

impl MapGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom dungeon carving parameters.
    pub fn with_dungeon(dungeon: DungeonGenerator) -> Self {
        Self { dungeon }
    }

    /// Generate a level.
    ///
    /// Fails with `InsufficientFloor` when the carved dungeon has fewer
    /// than `enemy_count + item_count + 1` floor cells.
    pub fn generate_map(
        &self,
        width: i32,
        height: i32,
        enemy_count: usize,
        item_count: usize,
        rng: &mut GameRng,
    ) -> Result<GameMap> {
        let grid = self.dungeon.generate(width, height, rng)?;
        let mut floor = grid.floor_coords();

        let needed = enemy_count.saturating_add(item_count).saturating_add(1);
        if floor.len() < needed {
            return Err(GameError::InsufficientFloor {
                needed,
                available: floor.len(),
            });
        }

        let mut ids = EntityAllocator::new();
        let player = Player::new(take_random(&mut floor, rng));

        let enemies: Vec<Enemy> = (0..enemy_count)
            .map(|_| Enemy::new(ids.alloc(), take_random(&mut floor, rng)))
            .collect();

        let items: Vec<Item> = (0..item_count)
            .map(|_| Item::potion(ids.alloc(), take_random(&mut floor, rng)))
            .collect();

        info!(
            "Generated {}x{} level: player at {}, {} enemies, {} items",
            width,
            height,
            player.position,
            enemies.len(),
            items.len()
        );

        Ok(GameMap::new(grid, player, enemies, items))
    }
}

/// Remove and return a random coordinate. `coords` must be non-empty.
fn take_random(coords: &mut Vec<Coord>, rng: &mut GameRng) -> Coord {
    let index = rng.gen_range_usize(0..coords.len());
    coords.swap_remove(index)
}
