use crate::difficulty::Difficulty;
use crate::leaderboard::consts::{DEFAULT_LEADERBOARD_LIMIT, MAX_LEADERBOARD_LIMIT};
use crate::leaderboard::requests::LeaderboardQueryParams;
use crate::leaderboard::responses::{LeaderboardError, LeaderboardResponse};
use crate::storage::interface::LeaderboardRepo;

pub struct LeaderboardHttpHandler<'a, BS: LeaderboardRepo> {
    leaderboard: &'a BS,
}

impl<'a, BS> LeaderboardHttpHandler<'a, BS>
where
    BS: LeaderboardRepo,
{
    pub fn new(leaderboard: &'a BS) -> Self {
        Self { leaderboard }
    }

    pub async fn top(
        &self,
        query_params: LeaderboardQueryParams,
    ) -> Result<LeaderboardResponse, LeaderboardError> {
        let difficulty: Difficulty = query_params
            .mode
            .as_deref()
            .ok_or(LeaderboardError::InvalidMode)?
            .parse()
            .map_err(|_| LeaderboardError::InvalidMode)?;
        let limit = query_params
            .limit
            .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
            .min(MAX_LEADERBOARD_LIMIT);
        let leaders = self
            .leaderboard
            .top(difficulty, limit)
            .await
            .map_err(|err| {
                tracing::error!(%difficulty, "Failed to read the leaderboard: {err}.");
                LeaderboardError::StoreUnavailable
            })?;
        Ok(LeaderboardResponse {
            error: false,
            leaders,
        })
    }
}
