//! Field of view: what the player can see right now, and what they have
//! seen before.

pub mod shadowcast;
pub mod explored;

pub use shadowcast::{compute_fov, FovMap};
pub use explored::ExploredMap;
