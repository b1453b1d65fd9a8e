use crate::difficulty::Difficulty;
use crate::leaderboard::models::{LeaderboardEntry, RankedEntry, SubmissionOutcome};
use crate::storage::errors::StoreError;
use crate::storage::interface::LeaderboardRepo;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct HashMapLeaderboardStorage {
    storage: Arc<RwLock<HashMap<Difficulty, HashMap<String, LeaderboardEntry>>>>,
}

#[async_trait]
impl LeaderboardRepo for HashMapLeaderboardStorage {
    async fn submit(
        &self,
        difficulty: Difficulty,
        username: &str,
        score: u64,
    ) -> Result<SubmissionOutcome, StoreError> {
        let mut storage_guard = self.storage.write().await;
        let entries = storage_guard.entry(difficulty).or_default();
        match entries.get_mut(username) {
            None => {
                entries.insert(
                    username.to_string(),
                    LeaderboardEntry {
                        username: username.to_string(),
                        score,
                        updated_at: Utc::now(),
                    },
                );
                Ok(SubmissionOutcome::Created)
            }
            Some(entry) if score > entry.score => {
                entry.score = score;
                entry.updated_at = Utc::now();
                Ok(SubmissionOutcome::Updated)
            }
            Some(_) => Ok(SubmissionOutcome::NoUpdateNeeded),
        }
    }

    async fn top(
        &self,
        difficulty: Difficulty,
        limit: usize,
    ) -> Result<Vec<RankedEntry>, StoreError> {
        let mut entries = self
            .storage
            .read()
            .await
            .get(&difficulty)
            .map(|entries| entries.values().cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        entries.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.updated_at.cmp(&b.updated_at))
                .then_with(|| a.username.cmp(&b.username))
        });
        Ok(entries
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, entry)| RankedEntry {
                rank: index + 1,
                username: entry.username,
                score: entry.score,
                timestamp: entry.updated_at,
            })
            .collect())
    }
}
