//! Health and inventory rules shared by every character.

use log::debug;

use crate::entities::{Combatant, Item, Player};

/// Damage, healing, liveness, and carrying items.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharacterService;

impl CharacterService {
    pub fn new() -> Self {
        Self
    }

    /// Reduce health by `amount`, never below zero. Dead characters are
    /// left untouched.
    pub fn take_damage<C: Combatant + ?Sized>(&self, character: &mut C, amount: i32) {
        if !self.is_alive(&*character) {
            return;
        }
        let health = (character.health() - amount.max(0)).max(0);
        character.set_health(health);
    }

    /// Restore up to `amount` health, capped at the maximum.
    ///
    /// Returns the health actually restored. Liveness is not checked, so
    /// healing a character at 0 health brings it back above 0.
    pub fn heal<C: Combatant + ?Sized>(&self, character: &mut C, amount: i32) -> i32 {
        let before = character.health();
        let health = before.saturating_add(amount.max(0)).min(character.max_health());
        character.set_health(health);
        health - before
    }

    #[must_use]
    pub fn is_alive<C: Combatant + ?Sized>(&self, character: &C) -> bool {
        character.health() > 0
    }

    /// Put an item into the player's inventory.
    ///
    /// With a capacity set and the inventory full, the item is handed back.
    pub fn take_item(&self, player: &mut Player, item: Item, capacity: Option<usize>) -> Result<(), Item> {
        if capacity.is_some_and(|cap| player.inventory.len() >= cap) {
            debug!("Inventory full, leaving {} on the floor", item.name());
            return Err(item);
        }
        player.inventory.push(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, EntityId};

    fn player() -> Player {
        Player::new(Coord::new(0, 0))
    }

    #[test]
    fn test_take_damage_reduces_health() {
        let mut p = player();
        CharacterService.take_damage(&mut p, 30);
        assert_eq!(p.health(), 70);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut p = player();
        CharacterService.take_damage(&mut p, 120);
        assert_eq!(p.health(), 0);
        assert!(!CharacterService.is_alive(&p));
    }

    #[test]
    fn test_dead_take_no_damage() {
        let mut p = player();
        p.set_health(0);
        CharacterService.take_damage(&mut p, 10);
        assert_eq!(p.health(), 0);
    }

    #[test]
    fn test_heal_increases_health() {
        let mut p = player();
        p.set_health(50);
        assert_eq!(CharacterService.heal(&mut p, 20), 20);
        assert_eq!(p.health(), 70);
    }

    #[test]
    fn test_heal_capped_at_max() {
        let mut p = player();
        assert_eq!(CharacterService.heal(&mut p, 50), 0);
        assert_eq!(p.health(), 100);

        p.set_health(90);
        assert_eq!(CharacterService.heal(&mut p, 25), 10);
        assert_eq!(p.health(), 100);
    }

    #[test]
    fn test_heal_applies_at_zero_health() {
        let mut p = player();
        p.set_health(0);
        assert_eq!(CharacterService.heal(&mut p, 25), 25);
        assert_eq!(p.health(), 25);
        assert!(CharacterService.is_alive(&p));
    }

    #[test]
    fn test_take_item() {
        let mut p = player();
        let potion = Item::potion(EntityId(1), Coord::new(1, 1));
        assert!(CharacterService.take_item(&mut p, potion.clone(), None).is_ok());
        assert_eq!(p.inventory, vec![potion]);
    }

    #[test]
    fn test_take_item_respects_capacity() {
        let mut p = player();
        let a = Item::potion(EntityId(1), Coord::new(1, 1));
        let b = Item::potion(EntityId(2), Coord::new(2, 1));
        assert!(CharacterService.take_item(&mut p, a, Some(1)).is_ok());
        let rejected = CharacterService.take_item(&mut p, b.clone(), Some(1)).unwrap_err();
        assert_eq!(rejected, b);
        assert_eq!(p.inventory.len(), 1);
    }
}
