//! Player actions and action history.
//!
//! One action is one turn: after the player's action resolves every living
//! enemy acts once. Recorded actions plus the config seed are enough to
//! rebuild a game exactly.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Orthogonal movement direction. `Up` decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit offset `(dx, dy)` for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The cell one step from `from` in this direction.
    #[must_use]
    pub const fn step(self, from: Coord) -> Coord {
        let (dx, dy) = self.delta();
        from.offset(dx, dy)
    }

    /// Parse a single-letter code: `U`, `D`, `L`, `R` (case-insensitive).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// What the player does with a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Step, attack, or pick up, depending on what occupies the target cell.
    Move(Direction),
    /// Consume the inventory item at this index.
    UseItem(usize),
    /// Skip the turn.
    Wait,
}

/// A recorded action with the turn it was taken on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub turn: u32,
    pub action: PlayerAction,
}

impl ActionRecord {
    #[must_use]
    pub fn new(turn: u32, action: PlayerAction) -> Self {
        Self { turn, action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_step() {
        let origin = Coord::new(5, 5);
        assert_eq!(Direction::Up.step(origin), Coord::new(5, 4));
        assert_eq!(Direction::Down.step(origin), Coord::new(5, 6));
        assert_eq!(Direction::Left.step(origin), Coord::new(4, 5));
        assert_eq!(Direction::Right.step(origin), Coord::new(6, 5));
    }

    #[test]
    fn test_direction_from_char() {
        assert_eq!(Direction::from_char('u'), Some(Direction::Up));
        assert_eq!(Direction::from_char('R'), Some(Direction::Right));
        assert_eq!(Direction::from_char('x'), None);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(3, PlayerAction::Move(Direction::Left));
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
