use crate::difficulty::Difficulty;
use crate::game::errors::GameError;
use crate::game::models::{Game, Round, Session, Summary};
use crate::geo::models::LatLng;
use crate::locations::models::Location;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub error: bool,
    pub game_id: String,
    pub game: GameView,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteGameResponse {
    pub error: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum GameView {
    Selecting,
    Playing(SessionView),
    GameOver(Summary),
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        match game {
            Game::Selecting => GameView::Selecting,
            Game::Playing(session) => GameView::Playing(SessionView::from(session)),
            Game::GameOver(summary) => GameView::GameOver(summary.clone()),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub difficulty: Difficulty,
    pub score: u64,
    pub correct: u64,
    pub wrong: u64,
    pub skipped: u64,
    pub time_left_secs: u64,
    pub round: RoundView,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            difficulty: session.difficulty,
            score: session.score,
            correct: session.correct,
            wrong: session.wrong,
            skipped: session.skipped,
            time_left_secs: session.time_left_secs,
            round: RoundView::from(&session.round),
        }
    }
}

/// What the player may see of the current round. Until the round is revealed only the picture
/// and the hint are exposed.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "status",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum RoundView {
    AwaitingLocation,
    AwaitingGuess {
        image_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
        guess: Option<LatLng>,
    },
    Revealed {
        location: Location,
        guess: LatLng,
        distance_km: f64,
        scored: bool,
    },
    NoContentRemaining,
}

impl From<&Round> for RoundView {
    fn from(round: &Round) -> Self {
        match round {
            Round::AwaitingLocation => RoundView::AwaitingLocation,
            Round::AwaitingGuess { location, guess } => RoundView::AwaitingGuess {
                image_url: location.image_url.clone(),
                hint: location.hint.clone(),
                guess: *guess,
            },
            Round::Revealed {
                location,
                guess,
                outcome,
            } => RoundView::Revealed {
                location: location.clone(),
                guess: *guess,
                distance_km: outcome.distance_km,
                scored: outcome.scored,
            },
            Round::NoContentRemaining => RoundView::NoContentRemaining,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameErrorResponse {
    pub error: bool,
    pub error_code: GameErrorCode,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameErrorCode {
    EmailNotVerified,
    InvalidMode,
    GameNotFound,
    NotYourGame,
    NotPlaying,
    AlreadyPlaying,
    InvalidCoordinates,
    NoRoundInProgress,
    RoundInProgress,
    NoGuessPlaced,
    AlreadyConfirmed,
    StoreUnavailable,
}

impl GameError {
    pub fn code(&self) -> GameErrorCode {
        match self {
            GameError::NotVerified => GameErrorCode::EmailNotVerified,
            GameError::InvalidMode => GameErrorCode::InvalidMode,
            GameError::GameNotFound => GameErrorCode::GameNotFound,
            GameError::NotYourGame => GameErrorCode::NotYourGame,
            GameError::NotPlaying => GameErrorCode::NotPlaying,
            GameError::AlreadyPlaying => GameErrorCode::AlreadyPlaying,
            GameError::InvalidCoordinates => GameErrorCode::InvalidCoordinates,
            GameError::NoRoundInProgress => GameErrorCode::NoRoundInProgress,
            GameError::RoundInProgress => GameErrorCode::RoundInProgress,
            GameError::NoGuessPlaced => GameErrorCode::NoGuessPlaced,
            GameError::AlreadyConfirmed => GameErrorCode::AlreadyConfirmed,
            GameError::Store(_) => GameErrorCode::StoreUnavailable,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            GameError::InvalidMode | GameError::InvalidCoordinates => StatusCode::BAD_REQUEST,
            GameError::NotVerified | GameError::NotYourGame => StatusCode::FORBIDDEN,
            GameError::GameNotFound => StatusCode::NOT_FOUND,
            GameError::NotPlaying
            | GameError::AlreadyPlaying
            | GameError::NoRoundInProgress
            | GameError::RoundInProgress
            | GameError::NoGuessPlaced
            | GameError::AlreadyConfirmed => StatusCode::CONFLICT,
            GameError::Store(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(GameErrorResponse {
                error: true,
                error_code: self.code(),
            }),
        )
            .into_response()
    }
}
