//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical dungeons and AI rolls
//! - **Context streams**: Independent sequences for map generation and
//!   enemy wandering, so adding an enemy roll never reshapes the dungeon
//! - **Serializable**: O(1) state capture and restore for save games
//!
//! ```
//! use simple_roguelike::core::GameRng;
//!
//! let root = GameRng::new(42);
//! let mut dungeon = root.for_context("dungeon");
//! let mut ai = root.for_context("ai");
//!
//! // Streams are independent but reproducible
//! let mut dungeon2 = GameRng::new(42).for_context("dungeon");
//! assert_eq!(dungeon.gen_range(0..100), dungeon2.gen_range(0..100));
//! let _ = ai.gen_step();
//! ```

use std::hash::Hasher;
use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a named context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// regardless of how far this RNG has advanced, and on every toolchain:
    /// the stream seed is an `FxHasher` digest of the seed and context bytes.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `range`. The range must be non-empty.
    pub fn gen_range(&mut self, range: Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Uniform index in `range`. The range must be non-empty.
    pub fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// A step of -1, 0 or 1 with equal probability.
    pub fn gen_step(&mut self) -> i32 {
        self.inner.gen_range(-1..=1)
    }

    /// True with the given probability.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

fn context_seed(seed: u64, context: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write_u64(seed);
    hasher.write(context.as_bytes());
    hasher.finish()
}

/// Serializable RNG position for save games.
///
/// Stores the ChaCha8 word position, so capture is O(1) regardless of how
/// many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
