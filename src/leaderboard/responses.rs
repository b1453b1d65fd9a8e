use crate::leaderboard::models::RankedEntry;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub error: bool,
    pub leaders: Vec<RankedEntry>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardErrorResponse {
    pub error: bool,
    pub error_code: LeaderboardError,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeaderboardError {
    InvalidMode,
    StoreUnavailable,
}

impl IntoResponse for LeaderboardError {
    fn into_response(self) -> Response {
        let status = match self {
            LeaderboardError::InvalidMode => StatusCode::BAD_REQUEST,
            LeaderboardError::StoreUnavailable => StatusCode::BAD_GATEWAY,
        };
        (
            status,
            Json(LeaderboardErrorResponse {
                error: true,
                error_code: self,
            }),
        )
            .into_response()
    }
}
