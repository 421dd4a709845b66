//! The turn loop.
//!
//! `GameController` owns one run: the level, the player's view of it, the
//! AI random stream, and the action history. A turn is:
//!
//! 1. resolve the player's action (move, attack, pick up, use, wait)
//! 2. recompute field of view
//! 3. drop enemies killed this turn
//! 4. every living enemy acts, pursuing along a fresh distance map
//! 5. check for death or victory

use im::Vector;
use log::{info, warn};

use super::event::GameEvent;
use super::status::{GameStatus, HudStatus, TurnReport};
use crate::core::{
    ActionRecord, Coord, Direction, GameConfig, GameError, GameRng, PlayerAction, Result,
};
use crate::entities::{Combatant, Enemy, Item};
use crate::fov::{ExploredMap, FovMap};
use crate::map::{GameMap, MapGenerator};
use crate::services::{
    AttackOutcome, CharacterService, CombatService, EnemyAi, ItemService, PlayerService,
};

/// RNG context names; each gets an independent stream from the seed.
pub(crate) const DUNGEON_STREAM: &str = "dungeon";
pub(crate) const AI_STREAM: &str = "ai";

/// One game in progress (or finished).
#[derive(Clone, Debug)]
pub struct GameController {
    pub(crate) config: GameConfig,
    pub(crate) map: GameMap,
    pub(crate) status: GameStatus,
    pub(crate) turn: u32,
    pub(crate) history: Vector<ActionRecord>,
    pub(crate) fov: FovMap,
    pub(crate) explored: ExploredMap,
    pub(crate) ai_rng: GameRng,
    characters: CharacterService,
    combat: CombatService,
    players: PlayerService,
    items: ItemService,
    ai: EnemyAi,
}

impl GameController {
    /// Validate the config and start a game from its seed.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let root = GameRng::new(config.seed);
        let map = MapGenerator::new().generate_map(
            config.width,
            config.height,
            config.enemy_count,
            config.item_count,
            &mut root.for_context(DUNGEON_STREAM),
        )?;

        let controller = Self::assemble(
            config,
            map,
            GameStatus::Playing,
            0,
            Vector::new(),
            root.for_context(AI_STREAM),
            None,
        );
        info!("New game started (seed {})", controller.config.seed);
        Ok(controller)
    }

    /// Rebuild a controller from parts; used by `new` and snapshot loading.
    pub(crate) fn assemble(
        config: GameConfig,
        map: GameMap,
        status: GameStatus,
        turn: u32,
        history: Vector<ActionRecord>,
        ai_rng: GameRng,
        explored: Option<ExploredMap>,
    ) -> Self {
        let characters = CharacterService::new();
        let combat = CombatService::new(characters);
        let explored = explored.unwrap_or_else(|| ExploredMap::new(map.width(), map.height()));
        let mut controller = Self {
            fov: FovMap::new(map.width(), map.height()),
            explored,
            ai: EnemyAi::new(combat, config.chase_radius),
            items: ItemService::new(characters),
            players: PlayerService::new(),
            characters,
            combat,
            config,
            map,
            status,
            turn,
            history,
            ai_rng,
        };
        controller.refresh_fov();
        controller
    }

    /// Discard the current run and start over from the config seed.
    pub fn start_new_game(&mut self) -> Result<()> {
        *self = Self::new(self.config.clone())?;
        Ok(())
    }

    /// Start over with a different seed.
    pub fn start_new_game_with_seed(&mut self, seed: u64) -> Result<()> {
        *self = Self::new(self.config.clone().with_seed(seed))?;
        Ok(())
    }

    /// Replay recorded actions on a fresh game.
    ///
    /// The same config and actions always reproduce the same state.
    pub fn replay<I>(config: GameConfig, actions: I) -> Result<Self>
    where
        I: IntoIterator<Item = PlayerAction>,
    {
        let mut controller = Self::new(config)?;
        for action in actions {
            controller.handle_action(action)?;
        }
        Ok(controller)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn map(&self) -> &GameMap {
        &self.map
    }

    /// Mutable level access for scripted setups.
    pub fn map_mut(&mut self) -> &mut GameMap {
        &mut self.map
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Turns taken so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn fov(&self) -> &FovMap {
        &self.fov
    }

    #[must_use]
    pub fn explored(&self) -> &ExploredMap {
        &self.explored
    }

    /// Is `coord` currently visible to the player?
    #[must_use]
    pub fn is_visible(&self, coord: Coord) -> bool {
        self.fov.is_visible(coord)
    }

    #[must_use]
    pub fn is_alive<C: Combatant + ?Sized>(&self, character: &C) -> bool {
        self.characters.is_alive(character)
    }

    /// Living enemies inside the player's field of view.
    pub fn visible_enemies(&self) -> impl Iterator<Item = &Enemy> + '_ {
        self.map
            .enemies
            .iter()
            .filter(|e| e.health() > 0 && self.fov.is_visible(e.position))
    }

    /// Floor items inside the player's field of view.
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.map
            .items
            .iter()
            .filter(|i| self.fov.is_visible(i.position))
    }

    #[must_use]
    pub fn hud(&self) -> HudStatus {
        let player = &self.map.player;
        HudStatus {
            health: player.health(),
            max_health: player.max_health(),
            experience: player.experience,
            experience_to_next_level: player.experience_to_next_level,
            level: player.level,
            attack_power: player.attack_power(),
            inventory_size: player.inventory.len(),
            enemies_remaining: self.map.living_enemy_count(),
            turn: self.turn,
        }
    }

    // === Turn Processing ===

    /// Move in `direction`; shorthand for `handle_action(PlayerAction::Move(..))`.
    pub fn handle_player_turn(&mut self, direction: Direction) -> Result<TurnReport> {
        self.handle_action(PlayerAction::Move(direction))
    }

    /// Run one full turn.
    ///
    /// Rejected actions (game over, bad inventory index) leave the state
    /// untouched and do not consume a turn.
    pub fn handle_action(&mut self, action: PlayerAction) -> Result<TurnReport> {
        if self.status.is_over() {
            warn!("Ignoring {:?}: game is {:?}", action, self.status);
            return Err(GameError::NotPlaying);
        }

        let mut events = Vec::new();
        match action {
            PlayerAction::Move(direction) => self.move_player(direction, &mut events),
            PlayerAction::UseItem(index) => {
                let used = self.items.use_item(&mut self.map.player, index).inspect_err(|e| {
                    warn!("Rejected item use: {}", e);
                })?;
                events.push(GameEvent::ItemUsed {
                    item: used.item.id,
                    healed: used.healed,
                });
            }
            PlayerAction::Wait => events.push(GameEvent::Waited),
        }

        self.turn += 1;
        self.history.push_back(ActionRecord::new(self.turn, action));

        if self.characters.is_alive(&self.map.player) {
            self.refresh_fov();
        }
        self.map.remove_dead_enemies();
        self.process_enemy_turns(&mut events);
        self.check_end_conditions(&mut events);

        Ok(TurnReport {
            turn: self.turn,
            events,
            status: self.status,
        })
    }

    fn move_player(&mut self, direction: Direction, events: &mut Vec<GameEvent>) {
        let from = self.map.player.position;
        let target = direction.step(from);

        if !self.map.grid.is_walkable(target) {
            events.push(GameEvent::PlayerBlocked { at: target });
            return;
        }

        if let Some(index) = self.map.enemy_index_at(target) {
            self.attack_enemy(index, events);
            return;
        }

        if let Some(index) = self.map.item_index_at(target) {
            self.pick_up(index, events);
        }

        self.map.player.set_position(target);
        events.push(GameEvent::PlayerMoved { from, to: target });
    }

    fn attack_enemy(&mut self, index: usize, events: &mut Vec<GameEvent>) {
        let outcome = self
            .combat
            .perform_attack(&self.map.player, &mut self.map.enemies[index]);

        if let AttackOutcome::Hit {
            damage,
            remaining_health,
            killed,
        } = outcome
        {
            let enemy = &self.map.enemies[index];
            let (target, experience) = (enemy.id, enemy.experience_reward);
            events.push(GameEvent::PlayerAttacked {
                target,
                damage,
                remaining_health,
            });
            if killed {
                info!("Player slew {}", target);
                events.push(GameEvent::EnemySlain {
                    enemy: target,
                    experience,
                });
                self.grant_experience(experience, events);
            }
        }
    }

    fn pick_up(&mut self, index: usize, events: &mut Vec<GameEvent>) {
        let item = self.map.items.remove(index);
        let id = item.id;
        match self
            .items
            .on_pickup(item, &mut self.map.player, self.config.inventory_capacity)
        {
            Ok(()) => events.push(GameEvent::ItemPickedUp { item: id }),
            Err(item) => {
                self.map.items.insert(index, item);
                events.push(GameEvent::InventoryFull { item: id });
            }
        }
    }

    fn grant_experience(&mut self, amount: u32, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::ExperienceGained { amount });
        for level in self.players.add_experience(&mut self.map.player, amount) {
            events.push(GameEvent::LevelUp { level });
        }
    }

    fn process_enemy_turns(&mut self, events: &mut Vec<GameEvent>) {
        let mut paths = self.ai.pursuit_map(&self.map);

        for index in 0..self.map.enemies.len() {
            if !self.characters.is_alive(&self.map.player) {
                break;
            }
            if let Some(event) = self
                .ai
                .perform_turn(&mut self.map, index, &mut paths, &mut self.ai_rng)
            {
                events.push(event);
            }
        }
    }

    fn check_end_conditions(&mut self, events: &mut Vec<GameEvent>) {
        if !self.characters.is_alive(&self.map.player) {
            self.status = GameStatus::GameOver;
            info!("Game over on turn {}", self.turn);
            events.push(GameEvent::PlayerDied);
        } else if self.map.living_enemy_count() == 0 {
            self.status = GameStatus::Victory;
            info!("Victory on turn {}", self.turn);
            events.push(GameEvent::Victory);
        }
    }

    fn refresh_fov(&mut self) {
        self.fov.compute(
            &self.map.grid,
            self.map.player.position,
            self.config.vision_radius,
        );
        self.explored.reveal(&self.fov);
    }
}
