//! RNG module - tile value and position draws
//!
//! All randomness in the engine flows through [`TileSpawner`]: it picks the
//! value of a new tile from a [`TileDistribution`] and the empty cell it lands
//! in. The generator is a seeded ChaCha stream, so the same seed replays the
//! same game.

use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::BoardError;
use crate::types::{is_tile_value, Tile, TILE_SPAWN_WEIGHTS};

/// Discrete distribution over tile values.
///
/// Built from `(value, weight)` pairs; a value is drawn with probability
/// `weight / total_weight`. Pairs with zero weight are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileDistribution {
    values: Vec<Tile>,
    /// Running weight totals, one per value
    cumulative: Vec<u32>,
}

impl TileDistribution {
    /// Build a distribution from `(value, weight)` pairs.
    pub fn new(weights: &[(Tile, u32)]) -> Result<Self, BoardError> {
        let mut values = Vec::with_capacity(weights.len());
        let mut cumulative = Vec::with_capacity(weights.len());
        let mut total = 0u32;

        for &(value, weight) in weights {
            if !is_tile_value(value) {
                return Err(BoardError::InvalidTile(value));
            }
            if weight == 0 {
                continue;
            }
            total = total.saturating_add(weight);
            values.push(value);
            cumulative.push(total);
        }

        if values.is_empty() {
            return Err(BoardError::EmptyDistribution);
        }
        Ok(Self { values, cumulative })
    }

    /// A distribution that always yields `value`.
    pub fn constant(value: Tile) -> Result<Self, BoardError> {
        Self::new(&[(value, 1)])
    }

    /// Tile values this distribution can produce.
    pub fn values(&self) -> &[Tile] {
        &self.values
    }

    /// Probability of drawing `value` (0.0 if it is not in the distribution).
    pub fn probability(&self, value: Tile) -> f64 {
        let total = self.total() as f64;
        let mut prev = 0u32;
        for (&v, &c) in self.values.iter().zip(&self.cumulative) {
            if v == value {
                return (c - prev) as f64 / total;
            }
            prev = c;
        }
        0.0
    }

    fn total(&self) -> u32 {
        // `new` guarantees at least one entry.
        self.cumulative.last().copied().unwrap_or(1)
    }
}

impl Default for TileDistribution {
    /// 2 with probability 7/8, 4 with probability 1/8.
    fn default() -> Self {
        let mut total = 0u32;
        let mut values = Vec::with_capacity(TILE_SPAWN_WEIGHTS.len());
        let mut cumulative = Vec::with_capacity(TILE_SPAWN_WEIGHTS.len());
        for (value, weight) in TILE_SPAWN_WEIGHTS {
            total += weight;
            values.push(value);
            cumulative.push(total);
        }
        Self { values, cumulative }
    }
}

impl Distribution<Tile> for TileDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        let roll = rng.gen_range(0..self.total());
        let idx = self.cumulative.partition_point(|&c| c <= roll);
        self.values[idx]
    }
}

/// Seeded source of tile values and spawn positions.
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: ChaCha8Rng,
    distribution: TileDistribution,
    seed: u64,
}

impl TileSpawner {
    /// Create a spawner with the default 2/4 distribution.
    pub fn new(seed: u64) -> Self {
        Self::with_distribution(seed, TileDistribution::default())
    }

    pub fn with_distribution(seed: u64, distribution: TileDistribution) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            distribution,
            seed,
        }
    }

    /// Create a spawner from a fresh OS-random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this spawner started from (for replaying a game).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn distribution(&self) -> &TileDistribution {
        &self.distribution
    }

    /// Swap the value distribution without disturbing the position stream.
    pub fn set_distribution(&mut self, distribution: TileDistribution) {
        self.distribution = distribution;
    }

    /// Draw the value of the next tile.
    pub fn next_value(&mut self) -> Tile {
        self.distribution.sample(&mut self.rng)
    }

    /// Pick one of `len` candidates uniformly. Returns `None` when `len == 0`.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}
