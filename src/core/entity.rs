//! Entity identification.
//!
//! Every object placed on a map (the player, enemies, items) has a unique
//! `EntityId`.
//!
//! ## ID Layout
//!
//! - `0`: the player
//! - `1..`: enemies and items, allocated by the map generator in placement
//!   order
//!
//! ```
//! use simple_roguelike::core::EntityId;
//!
//! assert!(EntityId::PLAYER.is_player());
//! assert!(!EntityId(3).is_player());
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a map entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// The player's fixed id.
    pub const PLAYER: EntityId = EntityId(0);

    /// First id available for enemies and items.
    pub const FIRST_NON_PLAYER: u32 = 1;

    /// Check if this id refers to the player.
    #[must_use]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Sequential allocator for non-player ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAllocator {
    next: u32,
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self {
            next: EntityId::FIRST_NON_PLAYER,
        }
    }
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn alloc(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}
