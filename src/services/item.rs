//! Picking up and using items.

use log::{debug, info};

use super::character::CharacterService;
use crate::core::{GameError, Result};
use crate::entities::{Item, ItemKind, Player};

/// What using an item did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemUse {
    pub item: Item,
    /// Health actually restored.
    pub healed: i32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ItemService {
    characters: CharacterService,
}

impl ItemService {
    pub fn new(characters: CharacterService) -> Self {
        Self { characters }
    }

    /// Store a picked-up item. Pickup never triggers the item's effect.
    ///
    /// A full inventory hands the item back.
    pub fn on_pickup(&self, item: Item, player: &mut Player, capacity: Option<usize>) -> std::result::Result<(), Item> {
        let name = item.name();
        self.characters.take_item(player, item, capacity)?;
        info!("Player picked up: {}", name);
        Ok(())
    }

    /// Consume the inventory item at `index`.
    pub fn use_item(&self, player: &mut Player, index: usize) -> Result<ItemUse> {
        if index >= player.inventory.len() {
            return Err(GameError::NoSuchItem(index));
        }
        let item = player.inventory.remove(index);

        let healed = match item.kind {
            ItemKind::Potion { healing } => self.characters.heal(player, healing),
        };
        debug!("Player used {} and recovered {} health", item.name(), healed);

        Ok(ItemUse { item, healed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, EntityId};
    use crate::entities::Combatant;

    fn setup() -> (ItemService, Player, Item) {
        (
            ItemService::default(),
            Player::new(Coord::new(0, 0)),
            Item::potion(EntityId(1), Coord::new(1, 1)),
        )
    }

    #[test]
    fn test_pickup_adds_to_inventory() {
        let (items, mut player, potion) = setup();
        items.on_pickup(potion.clone(), &mut player, None).unwrap();
        assert_eq!(player.inventory, vec![potion]);
    }

    #[test]
    fn test_pickup_does_not_heal() {
        let (items, mut player, potion) = setup();
        player.set_health(40);
        items.on_pickup(potion, &mut player, None).unwrap();
        assert_eq!(player.health(), 40);
    }

    #[test]
    fn test_use_potion_heals_and_consumes() {
        let (items, mut player, potion) = setup();
        items.on_pickup(potion.clone(), &mut player, None).unwrap();
        player.set_health(40);

        let used = items.use_item(&mut player, 0).unwrap();

        assert_eq!(used, ItemUse { item: potion, healed: 25 });
        assert_eq!(player.health(), 65);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_use_potion_capped() {
        let (items, mut player, potion) = setup();
        items.on_pickup(potion, &mut player, None).unwrap();
        player.set_health(90);

        assert_eq!(items.use_item(&mut player, 0).unwrap().healed, 10);
        assert_eq!(player.health(), 100);
    }

    #[test]
    fn test_use_missing_item() {
        let (items, mut player, _) = setup();
        assert!(matches!(items.use_item(&mut player, 0), Err(GameError::NoSuchItem(0))));
    }
}
