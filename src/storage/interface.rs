use crate::difficulty::Difficulty;
use crate::leaderboard::models::{RankedEntry, SubmissionOutcome};
use crate::locations::models::Location;
use crate::storage::errors::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait LocationRepo: Send + Sync {
    /// A random location of the given tier. Implementations should avoid `exclude` but callers
    /// must not rely on it. `None` means the tier has nothing left to offer.
    async fn random(
        &self,
        difficulty: Difficulty,
        exclude: &[String],
    ) -> Result<Option<Location>, StoreError>;
}

#[async_trait]
pub trait LeaderboardRepo: Send + Sync {
    /// Keeps the maximum: an existing entry is only overwritten by a strictly greater score.
    async fn submit(
        &self,
        difficulty: Difficulty,
        username: &str,
        score: u64,
    ) -> Result<SubmissionOutcome, StoreError>;

    async fn top(&self, difficulty: Difficulty, limit: usize)
        -> Result<Vec<RankedEntry>, StoreError>;
}
