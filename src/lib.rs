//! # simple-roguelike
//!
//! A deterministic, turn-based roguelike engine: procedurally generated
//! dungeons, a player who fights, levels up, and drinks potions, and enemies
//! that chase by distance map or wander at random.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: A seed fixes the dungeon and every AI roll, so a
//!    seed plus an action list replays a run exactly.
//!
//! 2. **Headless**: The engine reports what happened as `GameEvent`s and
//!    exposes state for a renderer; it never draws or reads input itself.
//!
//! 3. **Owned State**: One `GameController` per run. No globals.
//!
//! ## Modules
//!
//! - `core`: Coordinates, entity ids, actions, RNG, configuration, errors
//! - `map`: Tiles, dungeon generation, entity placement
//! - `entities`: Player, enemies, items
//! - `fov`: Recursive shadowcasting and explored-cell memory
//! - `pathfinding`: Dijkstra distance maps
//! - `services`: Combat, healing, experience, items, enemy AI
//! - `game`: The turn loop, events, save games

pub mod core;
pub mod map;
pub mod entities;
pub mod fov;
pub mod pathfinding;
pub mod services;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Coord, EntityId, GameRng, GameRngState,
    GameConfig, Direction, PlayerAction, ActionRecord,
    GameError, Result,
};

pub use crate::map::{Tile, TileGrid, GameMap, DungeonGenerator, MapGenerator};

pub use crate::entities::{Combatant, Stats, Player, Enemy, Item, ItemKind};

pub use crate::fov::{compute_fov, FovMap, ExploredMap};

pub use crate::pathfinding::{DijkstraMap, PathFinder};

pub use crate::services::{
    CharacterService, CombatService, AttackOutcome,
    PlayerService, ItemService, ItemUse, EnemyAi,
};

pub use crate::game::{GameController, GameEvent, GameStatus, HudStatus, TurnReport, Snapshot};
