use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// One of the three cell colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[display("blue")]
    Blue,
    #[display("red")]
    Red,
    #[display("yellow")]
    Yellow,
}

impl Distribution<Color> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        match rng.random_range(0..Color::LEN) {
            0 => Color::Blue,
            1 => Color::Red,
            _ => Color::Yellow,
        }
    }
}

impl Color {
    /// Number of colors (3).
    pub const LEN: usize = 3;

    pub const ALL: [Self; Self::LEN] = [Self::Blue, Self::Red, Self::Yellow];

    /// Returns the display color used by renderers, as `#rrggbb`.
    #[must_use]
    pub const fn hex_code(self) -> &'static str {
        match self {
            Color::Blue => "#3498db",
            Color::Red => "#e74c3c",
            Color::Yellow => "#f1c40f",
        }
    }
}

/// A single colored unit cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    color: Color,
}

impl Block {
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[must_use]
    pub fn is_same_color(self, other: Block) -> bool {
        self.color == other.color
    }
}
