//! Game status, per-turn reports, and HUD numbers.

use serde::{Deserialize, Serialize};

use super::event::GameEvent;

/// Lifecycle of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    /// The player died.
    GameOver,
    /// Every enemy died.
    Victory,
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// What one call to `handle_action` produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub turn: u32,
    pub events: Vec<GameEvent>,
    pub status: GameStatus,
}

/// Numbers a status bar shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudStatus {
    pub health: i32,
    pub max_health: i32,
    pub experience: u32,
    pub experience_to_next_level: u32,
    pub level: u32,
    pub attack_power: i32,
    pub inventory_size: usize,
    pub enemies_remaining: usize,
    pub turn: u32,
}

impl std::fmt::Display for HudStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "T{} HP {}/{} LV {} XP {}/{} ATK {} INV {} FOES {}",
            self.turn,
            self.health,
            self.max_health,
            self.level,
            self.experience,
            self.experience_to_next_level,
            self.attack_power,
            self.inventory_size,
            self.enemies_remaining
        )
    }
}
