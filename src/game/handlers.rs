use crate::app_context::{DefaultAppContext, RequestContext};
use crate::auth::extractors::Player;
use crate::game::errors::GameError;
use crate::game::requests::StartGameRequest;
use crate::game::responses::{DeleteGameResponse, GameResponse};
use crate::game::services::{CreateGameHttpHandler, GameHttpHandler};
use crate::geo::models::LatLng;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(
    Player(player): Player,
    State(app_context): State<DefaultAppContext>,
    Json(request): Json<StartGameRequest>,
) -> Result<Json<GameResponse>, GameError> {
    let response = CreateGameHttpHandler::new(app_context, &player)
        .create(request)
        .await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn state(
    Player(player): Player,
    Path(game_id): Path<String>,
    State(app_context): State<DefaultAppContext>,
) -> Result<Json<GameResponse>, GameError> {
    let request_context = RequestContext { player, game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .state()
        .await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn start(
    Player(player): Player,
    Path(game_id): Path<String>,
    State(app_context): State<DefaultAppContext>,
    Json(request): Json<StartGameRequest>,
) -> Result<Json<GameResponse>, GameError> {
    let request_context = RequestContext { player, game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .start(request)
        .await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn guess(
    Player(player): Player,
    Path(game_id): Path<String>,
    State(app_context): State<DefaultAppContext>,
    Json(guess): Json<LatLng>,
) -> Result<Json<GameResponse>, GameError> {
    let request_context = RequestContext { player, game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .guess(guess)
        .await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn confirm(
    Player(player): Player,
    Path(game_id): Path<String>,
    State(app_context): State<DefaultAppContext>,
) -> Result<Json<GameResponse>, GameError> {
    let request_context = RequestContext { player, game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .confirm()
        .await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn skip(
    Player(player): Player,
    Path(game_id): Path<String>,
    State(app_context): State<DefaultAppContext>,
) -> Result<Json<GameResponse>, GameError> {
    let request_context = RequestContext { player, game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .skip()
        .await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn next(
    Player(player): Player,
    Path(game_id): Path<String>,
    State(app_context): State<DefaultAppContext>,
) -> Result<Json<GameResponse>, GameError> {
    let request_context = RequestContext { player, game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .next()
        .await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn exit(
    Player(player): Player,
    Path(game_id): Path<String>,
    State(app_context): State<DefaultAppContext>,
) -> Result<Json<GameResponse>, GameError> {
    let request_context = RequestContext { player, game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .exit()
        .await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn delete(
    Player(player): Player,
    Path(game_id): Path<String>,
    State(app_context): State<DefaultAppContext>,
) -> Result<Json<DeleteGameResponse>, GameError> {
    let request_context = RequestContext { player, game_id };
    let response = GameHttpHandler::new(app_context, &request_context)
        .delete()
        .await?;
    Ok(Json(response))
}
