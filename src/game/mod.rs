//! Game orchestration: the turn loop, its events, and save games.
//!
//! ```
//! use simple_roguelike::core::{Direction, GameConfig, PlayerAction};
//! use simple_roguelike::game::{GameController, GameStatus};
//!
//! let config = GameConfig::default().with_seed(3);
//! let mut game = GameController::new(config).unwrap();
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! let report = game.handle_player_turn(Direction::Right).unwrap();
//! assert_eq!(report.turn, 1);
//! game.handle_action(PlayerAction::Wait).unwrap();
//! ```

pub mod controller;
pub mod event;
pub mod snapshot;
pub mod status;

pub use controller::GameController;
pub use event::GameEvent;
pub use snapshot::Snapshot;
pub use status::{GameStatus, HudStatus, TurnReport};
