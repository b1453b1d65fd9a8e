use crate::app_context::DefaultAppContext;
use crate::difficulty::Difficulty;
use crate::health::responses::{HealthCheckResponse, LocationCounts};
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn healthcheck(
    State(app_context): State<DefaultAppContext>,
) -> Json<HealthCheckResponse> {
    let mut locations = LocationCounts::default();
    for difficulty in Difficulty::ALL {
        let count = app_context.locations.count(difficulty).await;
        match difficulty {
            Difficulty::Easy => locations.easy = count,
            Difficulty::Medium => locations.medium = count,
            Difficulty::Hard => locations.hard = count,
        }
    }
    Json(HealthCheckResponse {
        error: false,
        active_games: app_context.games.count().await,
        locations,
    })
}
