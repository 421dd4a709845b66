//! Hostile monsters.

use serde::{Deserialize, Serialize};

use super::character::{Combatant, Stats};
use crate::core::{Coord, EntityId};

pub const ENEMY_BASE_HEALTH: i32 = 30;
pub const ENEMY_BASE_ATTACK: i32 = 5;
pub const ENEMY_XP_REWARD: u32 = 50;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub position: Coord,
    pub stats: Stats,
    /// Experience granted to the player for the kill.
    pub experience_reward: u32,
}

impl Enemy {
    #[must_use]
    pub fn new(id: EntityId, position: Coord) -> Self {
        Self {
            id,
            position,
            stats: Stats::new(ENEMY_BASE_HEALTH, ENEMY_BASE_ATTACK),
            experience_reward: ENEMY_XP_REWARD,
        }
    }
}

impl Combatant for Enemy {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &'static str {
        "Enemy"
    }

    fn position(&self) -> Coord {
        self.position
    }

    fn set_position(&mut self, position: Coord) {
        self.position = position;
    }

    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }
}
