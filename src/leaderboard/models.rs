use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Best score of one player on one tier.
#[derive(Clone, Debug)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: u64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub username: String,
    pub score: u64,
    /// 1-based position in descending score order.
    pub rank: usize,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionOutcome {
    Created,
    Updated,
    NoUpdateNeeded,
}
