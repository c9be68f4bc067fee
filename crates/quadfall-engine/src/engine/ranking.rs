use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::score::Score;

/// A finished game's score and when it was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub score: Score,
    pub recorded_at: DateTime<Utc>,
}

/// Storage for ranking entries.
///
/// Entries are stored and returned in ranking order (highest score first).
pub trait RankingRepository {
    fn find_all(&self) -> Vec<RankingEntry>;

    /// Replaces all stored entries.
    fn save(&mut self, entries: Vec<RankingEntry>);
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryRankingRepository {
    entries: Vec<RankingEntry>,
}

impl InMemoryRankingRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding previously saved entries.
    #[must_use]
    pub fn with_entries(entries: Vec<RankingEntry>) -> Self {
        Self { entries }
    }
}

impl RankingRepository for InMemoryRankingRepository {
    fn find_all(&self) -> Vec<RankingEntry> {
        self.entries.clone()
    }

    fn save(&mut self, entries: Vec<RankingEntry>) {
        self.entries = entries;
    }
}

/// High-score table keeping the best [`Ranking::MAX_ENTRIES`] scores.
///
/// # Example
///
/// ```
/// use quadfall_engine::{InMemoryRankingRepository, Ranking, Score};
///
/// let mut ranking = Ranking::new(InMemoryRankingRepository::new());
/// ranking.add_score(Score::new(12));
/// ranking.add_score(Score::new(40));
///
/// let scores: Vec<_> = ranking.entries().iter().map(|e| e.score.value()).collect();
/// assert_eq!(scores, [40, 12]);
/// ```
#[derive(Debug)]
pub struct Ranking<R> {
    repository: R,
}

impl<R> Ranking<R>
where
    R: RankingRepository,
{
    pub const MAX_ENTRIES: usize = 10;

    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Records `score` with the current time.
    pub fn add_score(&mut self, score: Score) {
        self.add_score_at(score, Utc::now());
    }

    /// Records `score` with an explicit timestamp.
    ///
    /// Ties keep their earlier entries ahead of the new one.
    pub fn add_score_at(&mut self, score: Score, recorded_at: DateTime<Utc>) {
        let mut entries = self.repository.find_all();
        entries.push(RankingEntry { score, recorded_at });
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(Self::MAX_ENTRIES);
        self.repository.save(entries);
    }

    /// Returns entries, highest score first.
    pub fn entries(&self) -> Vec<RankingEntry> {
        self.repository.find_all()
    }

    /// Returns whether `score` would enter the table.
    ///
    /// Always true while the table has free slots; otherwise the score must beat the
    /// lowest entry.
    pub fn is_top_score(&self, score: Score) -> bool {
        let entries = self.repository.find_all();
        if entries.len() < Self::MAX_ENTRIES {
            return true;
        }
        entries.last().is_none_or(|lowest| score > lowest.score)
    }

    pub fn clear(&mut self) {
        self.repository.save(Vec::new());
    }
}
