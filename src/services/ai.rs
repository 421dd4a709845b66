//! Enemy behaviour.
//!
//! Each turn an enemy picks the first behaviour that applies:
//!
//! 1. **Attack** when orthogonally adjacent to the player.
//! 2. **Chase** when within the chase radius: take one step along the
//!    pursuit path if that cell is free.
//! 3. **Wander** otherwise (or when the chase step is blocked): try a
//!    random step in any of the eight directions, or none.

use log::debug;

use super::combat::{AttackOutcome, CombatService};
use crate::core::GameRng;
use crate::entities::Combatant;
use crate::game::GameEvent;
use crate::map::GameMap;
use crate::pathfinding::{DijkstraMap, PathFinder};

#[derive(Clone, Copy, Debug)]
pub struct EnemyAi {
    combat: CombatService,
    chase_radius: u32,
}

impl EnemyAi {
    pub fn new(combat: CombatService, chase_radius: u32) -> Self {
        Self { combat, chase_radius }
    }

    #[must_use]
    pub fn chase_radius(&self) -> u32 {
        self.chase_radius
    }

    /// Walls-only distance map for the level, without goals.
    #[must_use]
    pub fn dijkstra_map(&self, map: &GameMap) -> DijkstraMap {
        DijkstraMap::from_grid(&map.grid)
    }

    /// Scanned distance map leading to the player.
    #[must_use]
    pub fn pursuit_map(&self, map: &GameMap) -> DijkstraMap {
        let mut paths = self.dijkstra_map(map);
        paths.set_goal(map.player.position);
        paths.scan();
        paths
    }

    /// Run one turn for `map.enemies[index]`.
    ///
    /// Returns the resulting event, or `None` if the enemy is dead or
    /// stayed put.
    pub fn perform_turn<P: PathFinder + ?Sized>(
        &self,
        map: &mut GameMap,
        index: usize,
        paths: &mut P,
        rng: &mut GameRng,
    ) -> Option<GameEvent> {
        let enemy = map.enemies.get(index)?;
        if enemy.health() <= 0 {
            return None;
        }
        let id = enemy.id;
        let from = enemy.position;
        let distance = from.manhattan(map.player.position);

        if distance <= 1 {
            return match self.combat.perform_attack(&map.enemies[index], &mut map.player) {
                AttackOutcome::Hit {
                    damage,
                    remaining_health,
                    ..
                } => Some(GameEvent::EnemyAttacked {
                    attacker: id,
                    damage,
                    remaining_health,
                }),
                AttackOutcome::Ignored => None,
            };
        }

        if distance <= self.chase_radius {
            if let Some(&next) = paths.find_path(from, 1).first() {
                if map.is_free_for_enemy(next) {
                    map.enemies[index].set_position(next);
                    return Some(GameEvent::EnemyMoved {
                        enemy: id,
                        from,
                        to: next,
                        chasing: true,
                    });
                }
            }
        }

        let dx = rng.gen_step();
        let dy = rng.gen_step();
        let target = from.offset(dx, dy);
        if map.is_free_for_enemy(target) {
            debug!("{} wanders from {} to {}", id, from, target);
            map.enemies[index].set_position(target);
            return Some(GameEvent::EnemyMoved {
                enemy: id,
                from,
                to: target,
                chasing: false,
            });
        }
        None
    }
}
