use crate::auth::extractors::Player;
use crate::auth::responses::DecodePasscodeResponse;
use axum::response::Json;

#[axum::debug_handler]
pub async fn decode_passcode(Player(player): Player) -> Json<DecodePasscodeResponse> {
    Json(DecodePasscodeResponse {
        error: false,
        username: player.username,
        verified: player.verified,
    })
}
