//! Game rules, one service per concern.
//!
//! Services are small `Copy` structs composed by the controller. They
//! mutate the entities they are handed and report what happened; none of
//! them own game state.

pub mod character;
pub mod combat;
pub mod progression;
pub mod item;
pub mod ai;

pub use character::CharacterService;
pub use combat::{AttackOutcome, CombatService};
pub use progression::PlayerService;
pub use item::{ItemService, ItemUse};
pub use ai::EnemyAi;
