use crate::storage::errors::StoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("the player's email address is not verified")]
    NotVerified,
    #[error("unknown difficulty")]
    InvalidMode,
    #[error("game not found")]
    GameNotFound,
    #[error("the game belongs to another player")]
    NotYourGame,
    #[error("no session is being played")]
    NotPlaying,
    #[error("a session is already being played")]
    AlreadyPlaying,
    #[error("coordinates are out of range")]
    InvalidCoordinates,
    #[error("no round is waiting for a guess")]
    NoRoundInProgress,
    #[error("the current round has not been answered or skipped")]
    RoundInProgress,
    #[error("no guess has been placed")]
    NoGuessPlaced,
    #[error("the guess was already confirmed")]
    AlreadyConfirmed,
    #[error(transparent)]
    Store(#[from] StoreError),
}
