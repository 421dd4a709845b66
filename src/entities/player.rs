//! The player character.

use serde::{Deserialize, Serialize};

use super::character::{Combatant, Stats};
use super::item::Item;
use crate::core::{Coord, EntityId};

pub const PLAYER_BASE_HEALTH: i32 = 100;
pub const PLAYER_BASE_ATTACK: i32 = 10;
pub const PLAYER_FIRST_LEVEL_XP: u32 = 100;

/// The player: stats, progression, and carried items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub position: Coord,
    pub stats: Stats,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next_level: u32,
    pub inventory: Vec<Item>,
}

impl Player {
    /// A level 1 player with 100 HP, 10 attack and an empty inventory.
    #[must_use]
    pub fn new(position: Coord) -> Self {
        Self {
            position,
            stats: Stats::new(PLAYER_BASE_HEALTH, PLAYER_BASE_ATTACK),
            level: 1,
            experience: 0,
            experience_to_next_level: PLAYER_FIRST_LEVEL_XP,
            inventory: Vec::new(),
        }
    }
}

impl Combatant for Player {
    fn id(&self) -> EntityId {
        EntityId::PLAYER
    }

    fn name(&self) -> &'static str {
        "Player"
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let player = Player::new(Coord::new(2, 3));
        assert_eq!(player.id(), EntityId::PLAYER);
        assert_eq!(player.health(), 100);
        assert_eq!(player.max_health(), 100);
        assert_eq!(player.attack_power(), 10);
        assert_eq!(player.level, 1);
        assert_eq!(player.experience, 0);
        assert_eq!(player.experience_to_next_level, 100);
        assert!(player.inventory.is_empty());
    }
}
