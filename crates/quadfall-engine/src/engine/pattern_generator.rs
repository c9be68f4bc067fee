use std::{
    fmt::{self, Write as _},
    str::FromStr,
};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    seq::SliceRandom as _,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Block, BlockPattern, Color, PatternCells, PatternKind, PatternSeedError};

/// Supplier of the patterns a game spawns its falling blocks from.
///
/// Games own their source, so it must be `Send` for a game to move between tasks.
pub trait PatternSource: fmt::Debug + Send {
    /// Produces the next pattern.
    fn next_pattern(&mut self) -> BlockPattern;
}

/// Seed for deterministic pattern generation.
///
/// A 128-bit (16-byte) seed that initializes the random number generator of a
/// [`PatternGenerator`]. The same seed always yields the same pattern sequence, which makes
/// simulations reproducible. It serializes as a 32-character hex string.
///
/// # Example
///
/// ```
/// use quadfall_engine::{PatternGenerator, PatternSeed, PatternSource as _};
/// use rand::Rng as _;
///
/// let seed: PatternSeed = rand::rng().random();
///
/// let mut first = PatternGenerator::with_seed(seed);
/// let mut second = PatternGenerator::with_seed(seed);
/// assert_eq!(first.next_pattern(), second.next_pattern());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternSeed([u8; 16]);

impl PatternSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Parses a 32-character hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, PatternSeedError> {
        if hex_str.len() != 32 {
            return Err(PatternSeedError {
                message: format!("expected 32 characters, got {}", hex_str.len()),
            });
        }
        let num = u128::from_str_radix(hex_str, 16).map_err(|e| PatternSeedError {
            message: format!("{hex_str} ({e})"),
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl FromStr for PatternSeed {
    type Err = PatternSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for PatternSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl Serialize for PatternSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{self}").map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for PatternSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}

impl Distribution<PatternSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PatternSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PatternSeed(seed)
    }
}

/// Random pattern generator.
///
/// Each call picks one of the four [`PatternKind`]s uniformly and fills the 2×2 grid
/// according to it:
///
/// - `Solid`: one color everywhere
/// - `ThreeOne`: three cells of one color, the fourth (random slot) of another
/// - `TwoTwo`: two colors split horizontally, vertically or diagonally
/// - `TwoOneOne`: two cells of one color, one each of the other two, shuffled
///
/// Every generated pattern has all four cells present.
#[derive(Debug, Clone)]
pub struct PatternGenerator {
    rng: Pcg32,
}

impl Default for PatternGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternGenerator {
    /// Creates a generator with a random seed.
    ///
    /// For deterministic generation, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: PatternSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }

    fn distinct_colors(&mut self) -> [Color; Color::LEN] {
        let mut colors = Color::ALL;
        colors.shuffle(&mut self.rng);
        colors
    }

    fn generate(&mut self, kind: PatternKind) -> BlockPattern {
        let [a, b, c] = self.distinct_colors().map(|color| Some(Block::new(color)));
        let cells: PatternCells = match kind {
            PatternKind::Solid => [[a, a], [a, a]],
            PatternKind::ThreeOne => {
                let mut flat = [a; 4];
                flat[self.rng.random_range(0..4)] = b;
                [[flat[0], flat[1]], [flat[2], flat[3]]]
            }
            PatternKind::TwoTwo => match self.rng.random_range(0..3) {
                0 => [[a, a], [b, b]],
                1 => [[a, b], [a, b]],
                _ => [[a, b], [b, a]],
            },
            PatternKind::TwoOneOne => {
                let mut flat = [a, a, b, c];
                flat.shuffle(&mut self.rng);
                [[flat[0], flat[1]], [flat[2], flat[3]]]
            }
        };
        BlockPattern::new(kind, cells)
    }
}

impl PatternSource for PatternGenerator {
    fn next_pattern(&mut self) -> BlockPattern {
        let kind = PatternKind::ALL[self.rng.random_range(0..PatternKind::LEN)];
        self.generate(kind)
    }
}

/// A fixed list of patterns handed out in order, wrapping around at the end.
///
/// Useful for scripted games and tests that need to know what spawns next.
///
/// # Panics
///
/// [`PatternSequence::new`] panics if `patterns` is empty.
#[derive(Debug, Clone)]
pub struct PatternSequence {
    patterns: Vec<BlockPattern>,
    next: usize,
}

impl PatternSequence {
    #[must_use]
    pub fn new(patterns: Vec<BlockPattern>) -> Self {
        assert!(!patterns.is_empty(), "pattern sequence must not be empty");
        Self { patterns, next: 0 }
    }

    /// A sequence that always yields a solid pattern of `color`.
    #[must_use]
    pub fn solid(color: Color) -> Self {
        let block = Some(Block::new(color));
        Self::new(vec![BlockPattern::new(
            PatternKind::Solid,
            [[block, block], [block, block]],
        )])
    }
}

impl PatternSource for PatternSequence {
    fn next_pattern(&mut self) -> BlockPattern {
        let pattern = self.patterns[self.next];
        self.next = (self.next + 1) % self.patterns.len();
        pattern
    }
}
