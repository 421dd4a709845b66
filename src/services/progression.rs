//! Experience and levelling.

use log::info;

use crate::entities::Player;

pub const LEVEL_UP_HEALTH: i32 = 20;
pub const LEVEL_UP_ATTACK: i32 = 2;


#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerService;

impl PlayerService {
    pub fn new() -> Self {
        Self
    }

    /// Grant experience, levelling up as many times as it covers.
    ///
    /// Returns each level reached, in order. Experience saturates at
    /// `u32::MAX`; a zero requirement never levels.
    pub fn add_experience(&self, player: &mut Player, amount: u32) -> Vec<u32> {
        let mut experience = player.experience.saturating_add(amount);
        let mut reached = Vec::new();

        while player.experience_to_next_level > 0 && experience >= player.experience_to_next_level {
            experience -= player.experience_to_next_level;
            self.level_up(player);
            reached.push(player.level);
        }

        player.experience = experience;
        reached
    }

    fn level_up(&self, player: &mut Player) {
        player.level = player.level.saturating_add(1);
        player.stats.max_health = player.stats.max_health.saturating_add(LEVEL_UP_HEALTH);
        player.stats.health = player.stats.health.saturating_add(LEVEL_UP_HEALTH);
        player.stats.attack_power = player.stats.attack_power.saturating_add(LEVEL_UP_ATTACK);
        // floor(requirement * 1.5), growing by at least one
        let requirement = player.experience_to_next_level;
        player.experience_to_next_level = requirement.saturating_add((requirement / 2).max(1));
        info!("Level up! Now level {}", player.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;
    use crate::entities::Combatant;

    fn player() -> Player {
        Player::new(Coord::new(0, 0))
    }

    #[test]
    fn test_experience_without_level_up() {
        let mut p = player();
        assert!(PlayerService.add_experience(&mut p, 50).is_empty());
        assert_eq!(p.experience, 50);
        assert_eq!(p.level, 1);
    }

    #[test]
    fn test_level_up_adds_health_to_current() {
        let mut p = player();
        p.set_health(60);

        let levels = PlayerService.add_experience(&mut p, 120);

        assert_eq!(levels, vec![2]);
        assert_eq!(p.level, 2);
        assert_eq!(p.experience, 20);
        assert_eq!(p.max_health(), 120);
        assert_eq!(p.health(), 80);
        assert_eq!(p.attack_power(), 12);
        assert_eq!(p.experience_to_next_level, 150);
    }

    #[test]
    fn test_multiple_level_ups() {
        let mut p = player();
        p.set_health(50);

        let levels = PlayerService.add_experience(&mut p, 260);

        assert_eq!(levels, vec![2, 3]);
        assert_eq!(p.level, 3);
        assert_eq!(p.experience, 10);
        assert_eq!(p.max_health(), 140);
        assert_eq!(p.health(), 90);
        assert_eq!(p.attack_power(), 14);
        assert_eq!(p.experience_to_next_level, 225);
    }

    #[test]
    fn test_huge_grant_saturates() {
        let mut p = player();
        PlayerService.add_experience(&mut p, 60);

        let levels = PlayerService.add_experience(&mut p, u32::MAX - 50);

        assert!(!levels.is_empty());
        assert_eq!(p.level as usize, 1 + levels.len());
        assert!(levels.windows(2).all(|w| w[1] == w[0] + 1));
        assert!(p.experience < p.experience_to_next_level);

        // Topping up again from near the cap still cannot overflow.
        PlayerService.add_experience(&mut p, u32::MAX);
        assert!(p.experience < p.experience_to_next_level);
    }

    #[test]
    fn test_zero_requirement_never_levels() {
        let mut p = player();
        p.experience_to_next_level = 0;
        assert!(PlayerService.add_experience(&mut p, 500).is_empty());
        assert_eq!(p.level, 1);
        assert_eq!(p.experience, 500);
    }

    #[test]
    fn test_tiny_requirement_still_grows() {
        let mut p = player();
        p.experience_to_next_level = 1;

        let levels = PlayerService.add_experience(&mut p, u32::MAX);

        assert!(levels.len() < 64);
        assert!(p.experience < p.experience_to_next_level);
        assert!(p.experience_to_next_level > 1);
    }

    #[test]
    fn test_exact_threshold_levels() {
        let mut p = player();
        PlayerService.add_experience(&mut p, 100);
        assert_eq!(p.level, 2);
        assert_eq!(p.experience, 0);
    }

    #[test]
    fn test_requirement_rounds_down() {
        let mut p = player();
        p.experience_to_next_level = 151;
        PlayerService.add_experience(&mut p, 151);
        assert_eq!(p.experience_to_next_level, 226);
    }
}
