//! Collectable items.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, EntityId};

pub const POTION_HEALING: i32 = 25;

/// What an item does when used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Restores health, capped at the user's maximum.
    Potion { healing: i32 },
}

/// An item lying on the map or carried in the inventory.
///
/// `position` is only meaningful while the item is on the map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    pub position: Coord,
    pub kind: ItemKind,
}

impl Item {
    /// A standard healing potion.
    #[must_use]
    pub fn potion(id: EntityId, position: Coord) -> Self {
        Self {
            id,
            position,
            kind: ItemKind::Potion {
                healing: POTION_HEALING,
            },
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self.kind {
            ItemKind::Potion { .. } => "Potion",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_potion() {
        let potion = Item::potion(EntityId(7), Coord::new(1, 1));
        assert_eq!(potion.name(), "Potion");
        assert_eq!(potion.kind, ItemKind::Potion { healing: 25 });
    }
}
