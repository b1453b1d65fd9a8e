use crate::auth::extractors::Player;
use crate::geo;
use crate::geo::requests::DistanceRequest;
use crate::geo::responses::{DistanceError, DistanceResponse};
use axum::response::Json;

#[axum::debug_handler]
pub async fn distance(
    _player: Player,
    Json(request): Json<DistanceRequest>,
) -> Result<Json<DistanceResponse>, DistanceError> {
    let (Some(guess), Some(actual)) = (request.guess, request.actual) else {
        return Err(DistanceError::MissingCoordinates);
    };
    if !guess.is_valid() || !actual.is_valid() {
        return Err(DistanceError::InvalidCoordinates);
    }
    Ok(Json(DistanceResponse {
        error: false,
        distance: geo::haversine_km(guess, actual),
    }))
}
