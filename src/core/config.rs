//! Game configuration.
//!
//! Everything that shapes a run lives here: map size, population, vision
//! and pursuit ranges, inventory limits, and the seed. Configs round-trip
//! through JSON so a run can be reproduced from a file.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Smallest width or height the dungeon generator accepts.
pub const MIN_MAP_SIZE: i32 = 5;

/// Largest width or height the dungeon generator accepts.
pub const MAX_MAP_SIZE: i32 = 1024;

/// `InvalidDimensions` unless both sides are within `MIN_MAP_SIZE..=MAX_MAP_SIZE`.
pub(crate) fn check_dimensions(width: i32, height: i32) -> Result<()> {
    let range = MIN_MAP_SIZE..=MAX_MAP_SIZE;
    if range.contains(&width) && range.contains(&height) {
        Ok(())
    } else {
        Err(GameError::InvalidDimensions {
            width,
            height,
            min: MIN_MAP_SIZE,
            max: MAX_MAP_SIZE,
        })
    }
}

/// Run configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Map width in cells.
    pub width: i32,

    /// Map height in cells.
    pub height: i32,

    /// Enemies placed at generation time.
    pub enemy_count: usize,

    /// Potions placed at generation time.
    pub item_count: usize,

    /// Player vision radius (Euclidean).
    pub vision_radius: u32,

    /// Manhattan distance within which enemies pursue the player.
    pub chase_radius: u32,

    /// Inventory slots. `None` for unlimited.
    pub inventory_capacity: Option<usize>,

    /// Seed for dungeon generation and AI rolls.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            enemy_count: 20,
            item_count: 10,
            vision_radius: 8,
            chase_radius: 8,
            inventory_capacity: None,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set map dimensions.
    #[must_use]
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set enemy and item counts.
    #[must_use]
    pub fn with_population(mut self, enemies: usize, items: usize) -> Self {
        self.enemy_count = enemies;
        self.item_count = items;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_vision_radius(mut self, radius: u32) -> Self {
        self.vision_radius = radius;
        self
    }

    #[must_use]
    pub fn with_chase_radius(mut self, radius: u32) -> Self {
        self.chase_radius = radius;
        self
    }

    #[must_use]
    pub fn with_inventory_capacity(mut self, capacity: usize) -> Self {
        self.inventory_capacity = Some(capacity);
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config describes a playable run.
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height)?;
        if self.vision_radius == 0 {
            return Err(GameError::InvalidConfig("vision radius must be positive".into()));
        }
        if self.inventory_capacity == Some(0) {
            return Err(GameError::InvalidConfig("inventory capacity must be positive".into()));
        }
        Ok(())
    }
}
