//! Headless driver: play a scripted move list and print the result.
//!
//! ```text
//! roguelike --seed 42 --moves RRRDDWP --render
//! roguelike --config game.json --moves UUL --save run.bin
//! roguelike --load run.bin --moves W --json
//! ```

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};
use rustc_hash::FxHashMap;

use simple_roguelike::core::{Coord, Direction, GameConfig, PlayerAction};
use simple_roguelike::game::{GameController, TurnReport};

#[derive(Parser, Debug)]
#[command(name = "roguelike")]
#[command(about = "Run a deterministic roguelike game from a scripted move list")]
struct Cli {
    /// JSON config file; missing fields take defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the config seed
    #[arg(long)]
    seed: Option<u64>,

    /// Moves: U/D/L/R to step, W to wait, P to drink the first potion
    #[arg(long, default_value = "")]
    moves: String,

    /// Resume from a save file instead of starting a new game
    #[arg(long, conflicts_with_all = ["config", "seed"])]
    load: Option<PathBuf>,

    /// Write a save file after the moves are played
    #[arg(long)]
    save: Option<PathBuf>,

    /// Print the player's view of the map after each turn
    #[arg(long)]
    render: bool,

    /// Print each turn report as a JSON line
    #[arg(long)]
    json: bool,
}

fn parse_moves(moves: &str) -> Result<Vec<PlayerAction>, String> {
    moves
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_uppercase() {
            'W' => Ok(PlayerAction::Wait),
            'P' => Ok(PlayerAction::UseItem(0)),
            other => Direction::from_char(other)
                .map(PlayerAction::Move)
                .ok_or_else(|| format!("unknown move '{c}'")),
        })
        .collect()
}

/// ASCII view: visible cells in full, explored cells as terrain only.
fn render(game: &GameController) -> String {
    let map = game.map();
    let mut overlay: FxHashMap<Coord, char> = FxHashMap::default();
    for item in game.visible_items() {
        overlay.insert(item.position, '!');
    }
    for enemy in game.visible_enemies() {
        overlay.insert(enemy.position, 'E');
    }
    overlay.insert(map.player.position, '@');

    let mut out = String::new();
    for y in 0..map.height() {
        for x in 0..map.width() {
            let coord = Coord::new(x, y);
            let glyph = if game.is_visible(coord) {
                overlay
                    .get(&coord)
                    .copied()
                    .or_else(|| map.tile(coord).map(|t| t.glyph()))
            } else if game.explored().is_explored(coord) {
                map.tile(coord).map(|t| t.glyph())
            } else {
                None
            };
            out.push(glyph.unwrap_or(' '));
        }
        out.push('\n');
    }
    out
}

fn print_report(report: &TurnReport, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        for event in &report.events {
            println!("[{}] {:?}", report.turn, event);
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let actions = parse_moves(&cli.moves)?;

    let mut game = match &cli.load {
        Some(path) => GameController::load(&fs::read(path)?)?,
        None => {
            let mut config = match &cli.config {
                Some(path) => GameConfig::from_json_str(&fs::read_to_string(path)?)?,
                None => GameConfig::default(),
            };
            if let Some(seed) = cli.seed {
                config = config.with_seed(seed);
            }
            GameController::new(config)?
        }
    };

    for action in actions {
        if game.status().is_over() {
            warn!("Game ended; ignoring remaining moves");
            break;
        }
        match game.handle_action(action) {
            Ok(report) => print_report(&report, cli.json)?,
            Err(e) => warn!("{:?} rejected: {}", action, e),
        }
        if cli.render {
            print!("{}", render(&game));
        }
    }

    println!("{}", game.hud());
    println!("Status: {:?}", game.status());

    if let Some(path) = &cli.save {
        fs::write(path, game.save()?)?;
        info!("Wrote {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
