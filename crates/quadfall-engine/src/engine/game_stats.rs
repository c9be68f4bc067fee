use serde::Serialize;

use crate::rules::removal::ChainOutcome;

/// Per-game statistics.
///
/// Tracks metrics that the score alone does not capture:
///
/// - **Landed blocks**: Number of falling blocks fixed into the field
/// - **Cleared cells**: Sum of matched rectangle areas (equal to the score)
/// - **Chains**: Total chain steps, and the longest chain triggered by a single landing
///
/// # Example
///
/// ```
/// use quadfall_engine::{GameStats, rules::removal::ChainOutcome};
///
/// let mut stats = GameStats::new();
/// stats.record_landing(ChainOutcome { cleared_cells: 8, chains: 2 });
///
/// assert_eq!(stats.landed_blocks(), 1);
/// assert_eq!(stats.cleared_cells(), 8);
/// assert_eq!(stats.longest_chain(), 2);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct GameStats {
    landed_blocks: u64,
    cleared_cells: u64,
    total_chains: u64,
    longest_chain: u64,
}

impl GameStats {
    /// Creates a new statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            landed_blocks: 0,
            cleared_cells: 0,
            total_chains: 0,
            longest_chain: 0,
        }
    }

    #[must_use]
    pub const fn landed_blocks(&self) -> u64 {
        self.landed_blocks
    }

    #[must_use]
    pub const fn cleared_cells(&self) -> u64 {
        self.cleared_cells
    }

    /// Returns the number of chain steps across all landings.
    #[must_use]
    pub const fn total_chains(&self) -> u64 {
        self.total_chains
    }

    /// Returns the most chain steps triggered by one landing.
    #[must_use]
    pub const fn longest_chain(&self) -> u64 {
        self.longest_chain
    }

    /// Updates statistics after a block lands and its removal chain finishes.
    pub fn record_landing(&mut self, outcome: ChainOutcome) {
        let chains = outcome.chains as u64;
        self.landed_blocks += 1;
        self.cleared_cells += outcome.cleared_cells as u64;
        self.total_chains += chains;
        self.longest_chain = self.longest_chain.max(chains);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_chain_keeps_maximum() {
        let mut stats = GameStats::new();
        stats.record_landing(ChainOutcome {
            cleared_cells: 12,
            chains: 3,
        });
        stats.record_landing(ChainOutcome::default());
        stats.record_landing(ChainOutcome {
            cleared_cells: 4,
            chains: 1,
        });
        assert_eq!(stats.landed_blocks(), 3);
        assert_eq!(stats.cleared_cells(), 16);
        assert_eq!(stats.total_chains(), 4);
        assert_eq!(stats.longest_chain(), 3);
    }
}
