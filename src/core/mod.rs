//! Core engine types: coordinates, entity ids, actions, RNG, configuration,
//! errors.
//!
//! Nothing in here knows about tiles, monsters, or turn order; those live
//! in `map`, `entities`, and `game`.

pub mod coord;
pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use coord::Coord;
pub use entity::{EntityAllocator, EntityId};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, MAX_MAP_SIZE, MIN_MAP_SIZE};
pub use action::{ActionRecord, Direction, PlayerAction};
pub use error::{GameError, Result};
