//! Turn events.
//!
//! Everything observable that happens during a turn is reported as a
//! `GameEvent`, in the order it happened. A front end can animate or
//! narrate from these without diffing state.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, EntityId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player stepped to a new cell.
    PlayerMoved { from: Coord, to: Coord },

    /// The player walked into a wall or the map edge.
    PlayerBlocked { at: Coord },

    /// The player hit an enemy.
    PlayerAttacked {
        target: EntityId,
        damage: i32,
        remaining_health: i32,
    },

    /// An enemy died to the player's attack.
    EnemySlain { enemy: EntityId, experience: u32 },

    /// The player gained experience.
    ExperienceGained { amount: u32 },

    /// The player reached a new level.
    LevelUp { level: u32 },

    /// An item went into the inventory.
    ItemPickedUp { item: EntityId },

    /// The inventory was full; the item stays on the floor.
    InventoryFull { item: EntityId },

    /// The player consumed an item.
    ItemUsed { item: EntityId, healed: i32 },

    /// The player skipped the turn.
    Waited,

    /// An enemy hit the player.
    EnemyAttacked {
        attacker: EntityId,
        damage: i32,
        remaining_health: i32,
    },

    /// An enemy moved, either chasing the player or wandering.
    EnemyMoved {
        enemy: EntityId,
        from: Coord,
        to: Coord,
        chasing: bool,
    },

    /// The player's health reached zero.
    PlayerDied,

    /// No enemies remain.
    Victory,
}
