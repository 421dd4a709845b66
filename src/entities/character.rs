//! Shared combat stats and the `Combatant` trait.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, EntityId};

/// Health and attack numbers for anything that can fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub health: i32,
    pub max_health: i32,
    pub attack_power: i32,
}

impl Stats {
    /// Stats at full health.
    #[must_use]
    pub const fn new(health: i32, attack_power: i32) -> Self {
        Self {
            health,
            max_health: health,
            attack_power,
        }
    }
}

/// Anything on the map with stats: the player and enemies.
///
/// Services operate on `Combatant` so the same damage, healing and attack
/// rules apply in both directions.
pub trait Combatant {
    fn id(&self) -> EntityId;

    /// Short display name for logs.
    fn name(&self) -> &'static str;

    fn position(&self) -> Coord;

    fn set_position(&mut self, position: Coord);

    fn stats(&self) -> &Stats;

    fn stats_mut(&mut self) -> &mut Stats;

    // === Convenience Methods ===

    fn health(&self) -> i32 {
        self.stats().health
    }

    fn max_health(&self) -> i32 {
        self.stats().max_health
    }

    fn attack_power(&self) -> i32 {
        self.stats().attack_power
    }

    fn set_health(&mut self, health: i32) {
        self.stats_mut().health = health;
    }
}
