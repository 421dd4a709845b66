//! Melee attacks.

use log::debug;

use super::character::CharacterService;
use crate::entities::Combatant;

/// Result of one attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Attacker or target was already dead; nothing happened.
    Ignored,
    /// Damage was applied.
    Hit {
        damage: i32,
        remaining_health: i32,
        killed: bool,
    },
}

impl AttackOutcome {
    /// Did this attack kill the target?
    #[must_use]
    pub fn killed(&self) -> bool {
        matches!(self, AttackOutcome::Hit { killed: true, .. })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CombatService {
    characters: CharacterService,
}

impl CombatService {
    pub fn new(characters: CharacterService) -> Self {
        Self { characters }
    }

    /// `attacker` strikes `target` for its full attack power.
    pub fn perform_attack<A, T>(&self, attacker: &A, target: &mut T) -> AttackOutcome
    where
        A: Combatant + ?Sized,
        T: Combatant + ?Sized,
    {
        if !self.characters.is_alive(attacker) || !self.characters.is_alive(&*target) {
            return AttackOutcome::Ignored;
        }

        let damage = attacker.attack_power();
        self.characters.take_damage(target, damage);
        let remaining_health = target.health();

        debug!(
            "{} {} attacks {} {} for {} damage, {} health left",
            attacker.name(),
            attacker.id(),
            target.name(),
            target.id(),
            damage,
            remaining_health
        );

        AttackOutcome::Hit {
            damage,
            remaining_health,
            killed: !self.characters.is_alive(&*target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, EntityId};
    use crate::entities::{Enemy, Player};

    fn pair() -> (Player, Enemy) {
        (Player::new(Coord::new(0, 0)), Enemy::new(EntityId(1), Coord::new(1, 0)))
    }

    #[test]
    fn test_attacker_damages_target() {
        let (player, mut enemy) = pair();
        let outcome = CombatService::default().perform_attack(&player, &mut enemy);

        assert_eq!(
            outcome,
            AttackOutcome::Hit {
                damage: 10,
                remaining_health: 20,
                killed: false
            }
        );
        assert_eq!(enemy.health(), 20);
    }

    #[test]
    fn test_reports_kill() {
        let (player, mut enemy) = pair();
        enemy.set_health(10);
        let outcome = CombatService::default().perform_attack(&player, &mut enemy);
        assert!(outcome.killed());
        assert_eq!(enemy.health(), 0);
    }

    #[test]
    fn test_survivor_not_killed() {
        let (mut player, enemy) = pair();
        let outcome = CombatService::default().perform_attack(&enemy, &mut player);
        assert!(!outcome.killed());
        assert_eq!(player.health(), 95);
    }

    #[test]
    fn test_dead_cannot_attack_or_be_attacked() {
        let (mut player, mut enemy) = pair();
        let combat = CombatService::default();

        enemy.set_health(0);
        assert_eq!(combat.perform_attack(&enemy, &mut player), AttackOutcome::Ignored);
        assert_eq!(combat.perform_attack(&player, &mut enemy), AttackOutcome::Ignored);
        assert_eq!(player.health(), 100);
    }
}
