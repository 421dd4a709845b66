//! Pathfinding for enemy pursuit.

pub mod dijkstra;

pub use dijkstra::{DijkstraMap, PathFinder, UNREACHABLE};
