//! Things that live on the map: the player, enemies, items.

pub mod character;
pub mod player;
pub mod enemy;
pub mod item;

pub use character::{Combatant, Stats};
pub use player::Player;
pub use enemy::Enemy;
pub use item::{Item, ItemKind};
