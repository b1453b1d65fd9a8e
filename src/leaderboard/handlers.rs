use crate::app_context::DefaultAppContext;
use crate::auth::extractors::Player;
use crate::leaderboard::requests::LeaderboardQueryParams;
use crate::leaderboard::responses::{LeaderboardError, LeaderboardResponse};
use crate::leaderboard::services::LeaderboardHttpHandler;
use axum::extract::{Query, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn top(
    _player: Player,
    Query(query_params): Query<LeaderboardQueryParams>,
    State(app_context): State<DefaultAppContext>,
) -> Result<Json<LeaderboardResponse>, LeaderboardError> {
    let response = LeaderboardHttpHandler::new(&app_context.leaderboard)
        .top(query_params)
        .await?;
    Ok(Json(response))
}
