//! Save games.
//!
//! A snapshot holds everything needed to resume a run exactly: the level,
//! turn counter, history, explored cells, and the AI stream position. The
//! field of view is recomputed on load.

use im::Vector;
use log::info;
use serde::{Deserialize, Serialize};

use super::controller::GameController;
use super::status::GameStatus;
use crate::core::{ActionRecord, GameConfig, GameError, GameRng, GameRngState, Result};
use crate::fov::ExploredMap;
use crate::map::GameMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: GameConfig,
    pub map: GameMap,
    pub status: GameStatus,
    pub turn: u32,
    pub history: Vector<ActionRecord>,
    pub explored: ExploredMap,
    pub ai_rng: GameRngState,
}

impl Snapshot {
    #[must_use]
    pub fn capture(game: &GameController) -> Self {
        Self {
            config: game.config.clone(),
            map: game.map.clone(),
            status: game.status,
            turn: game.turn,
            history: game.history.clone(),
            explored: game.explored.clone(),
            ai_rng: game.ai_rng.state(),
        }
    }

    /// Rebuild a controller from this snapshot.
    ///
    /// Fails with `CorruptSnapshot` when the level does not fit its own
    /// config, so a tampered save never reaches the turn loop.
    pub fn restore(self) -> Result<GameController> {
        self.config.validate()?;
        self.check_consistency()?;
        Ok(GameController::assemble(
            self.config,
            self.map,
            self.status,
            self.turn,
            self.history,
            GameRng::from_state(&self.ai_rng),
            Some(self.explored),
        ))
    }

    fn check_consistency(&self) -> Result<()> {
        let corrupt = |reason: &str| Err(GameError::CorruptSnapshot(reason.to_string()));
        let grid = &self.map.grid;
        if !grid.is_well_formed() {
            return corrupt("tile count does not match map size");
        }
        if grid.width() != self.config.width || grid.height() != self.config.height {
            return corrupt("map size does not match config");
        }
        if !self.explored.is_well_formed()
            || self.explored.width() != grid.width()
            || self.explored.height() != grid.height()
        {
            return corrupt("explored cells do not match map size");
        }
        let positions = std::iter::once(self.map.player.position)
            .chain(self.map.enemies.iter().map(|e| e.position))
            .chain(self.map.items.iter().map(|i| i.position));
        for position in positions {
            if !grid.in_bounds(position) {
                return corrupt("entity outside the map");
            }
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl GameController {
    /// Serialize the run to bytes.
    pub fn save(&self) -> Result<Vec<u8>> {
        let bytes = Snapshot::capture(self).to_bytes()?;
        info!("Saved turn {} ({} bytes)", self.turn, bytes.len());
        Ok(bytes)
    }

    /// Resume a run saved with [`GameController::save`].
    pub fn load(bytes: &[u8]) -> Result<Self> {
        let game = Snapshot::from_bytes(bytes)?.restore()?;
        info!("Loaded turn {}", game.turn());
        Ok(game)
    }
}
