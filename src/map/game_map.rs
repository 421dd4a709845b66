//! A generated level: the tile grid plus everything standing on it.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileGrid};
use crate::core::Coord;
use crate::entities::{Combatant, Enemy, Item, Player};

/// Tiles, the player, enemies, and items on the floor.
///
/// Fields are public so callers can borrow the player and an enemy
/// mutably at the same time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    pub grid: TileGrid,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub items: Vec<Item>,
}

impl GameMap {
    #[must_use]
    pub fn new(grid: TileGrid, player: Player, enemies: Vec<Enemy>, items: Vec<Item>) -> Self {
        Self {
            grid,
            player,
            enemies,
            items,
        }
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Tile at `coord`, `None` outside the map.
    #[must_use]
    pub fn tile(&self, coord: Coord) -> Option<Tile> {
        self.grid.tile(coord)
    }

    /// Index of the living enemy standing on `coord`.
    #[must_use]
    pub fn enemy_index_at(&self, coord: Coord) -> Option<usize> {
        self.enemies
            .iter()
            .position(|e| e.health() > 0 && e.position == coord)
    }

    /// Index of the first item lying on `coord`.
    #[must_use]
    pub fn item_index_at(&self, coord: Coord) -> Option<usize> {
        self.items.iter().position(|i| i.position == coord)
    }

    /// Living enemies still on the map.
    #[must_use]
    pub fn living_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.health() > 0).count()
    }

    /// Drop dead enemies, returning them.
    pub fn remove_dead_enemies(&mut self) -> Vec<Enemy> {
        let (alive, dead): (Vec<_>, Vec<_>) = std::mem::take(&mut self.enemies)
            .into_iter()
            .partition(|e| e.health() > 0);
        self.enemies = alive;
        dead
    }

    /// True when an enemy could step onto `coord`: in bounds, walkable,
    /// not the player, and not taken by a living enemy.
    #[must_use]
    pub fn is_free_for_enemy(&self, coord: Coord) -> bool {
        self.grid.is_walkable(coord)
            && self.player.position != coord
            && self.enemy_index_at(coord).is_none()
    }
}
