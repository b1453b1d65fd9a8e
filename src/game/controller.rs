use crate::auth::models::AuthContext;
use crate::difficulty::Difficulty;
use crate::game::consts::MAX_LOCATION_FETCH_ATTEMPTS;
use crate::game::errors::GameError;
use crate::game::models::{Game, RoundOutcome, Session, SubmissionStatus, Summary, TickOutcome};
use crate::geo::models::LatLng;
use crate::locations::fetch::{fetch_unique, FetchError};
use crate::storage::interface::{LeaderboardRepo, LocationRepo};

/// Drives one player's [`Game`] through its sessions and rounds. The session timer lives apart
/// from the player, see [`tick`].
pub struct GameController<'a, LS> {
    player: &'a AuthContext,
    locations: &'a LS,
    session_duration_secs: u64,
}

impl<'a, LS> GameController<'a, LS>
where
    LS: LocationRepo,
{
    pub fn new(player: &'a AuthContext, locations: &'a LS, session_duration_secs: u64) -> Self {
        Self {
            player,
            locations,
            session_duration_secs,
        }
    }

    /// Opens a fresh session and fetches its first round.
    pub async fn start(&self, game: &mut Game, difficulty: Difficulty) -> Result<(), GameError> {
        if !self.player.verified {
            return Err(GameError::NotVerified);
        }
        if let Game::Playing(_) = game {
            return Err(GameError::AlreadyPlaying);
        }
        *game = Game::Playing(Session::new(
            self.player.username.clone(),
            difficulty,
            self.session_duration_secs,
        ));
        tracing::info!(
            task = "game_started",
            username = %self.player.username,
            difficulty = %difficulty,
            time_budget_secs = self.session_duration_secs,
        );
        self.next_round(game).await
    }

    pub async fn next_round(&self, game: &mut Game) -> Result<(), GameError> {
        let session = game.session_mut()?;
        session.prepare_next_round()?;
        let fetched = fetch_unique(
            self.locations,
            session.difficulty,
            &session.shown,
            MAX_LOCATION_FETCH_ATTEMPTS,
        )
        .await;
        match fetched {
            Ok(location) => session.begin_round(location),
            Err(FetchError::Exhausted) => {
                tracing::info!(
                    username = %session.username,
                    difficulty = %session.difficulty,
                    shown = session.shown.len(),
                    "No unseen locations left for the session.",
                );
                session.mark_exhausted();
                Ok(())
            }
            Err(FetchError::Store(err)) => {
                tracing::error!(
                    username = %session.username,
                    "Failed to fetch a location: {err}."
                );
                Err(GameError::Store(err))
            }
        }
    }

    pub fn place_guess(&self, game: &mut Game, guess: LatLng) -> Result<(), GameError> {
        game.session_mut()?.place_guess(guess)
    }

    pub fn confirm(&self, game: &mut Game) -> Result<RoundOutcome, GameError> {
        let session = game.session_mut()?;
        let outcome = session.confirm()?;
        tracing::info!(
            task = "round_confirmed",
            username = %session.username,
            difficulty = %session.difficulty,
            distance_km = outcome.distance_km,
            scored = outcome.scored,
        );
        Ok(outcome)
    }

    pub async fn skip(&self, game: &mut Game) -> Result<(), GameError> {
        game.session_mut()?.skip()?;
        self.next_round(game).await
    }

    /// Leaves the current session without submitting anything.
    pub fn exit(&self, game: &mut Game) {
        if let Game::Playing(session) = game {
            tracing::info!(
                username = %session.username,
                difficulty = %session.difficulty,
                score = session.score,
                "Session discarded on exit.",
            );
        }
        *game = Game::Selecting;
    }
}

/// Advances the timer of session `session_id` by one second, finishing the game when it runs out.
pub async fn tick<BS>(leaderboard: &BS, game: &mut Game, session_id: &str) -> TickOutcome
where
    BS: LeaderboardRepo + ?Sized,
{
    let Game::Playing(session) = game else {
        return TickOutcome::Inactive;
    };
    if session.id != session_id {
        return TickOutcome::Inactive;
    }
    let time_left_secs = session.tick();
    if time_left_secs > 0 {
        return TickOutcome::Running { time_left_secs };
    }
    let summary = session.summary();
    *game = Game::GameOver(summary);
    match finalize(leaderboard, game).await {
        Some(summary) => TickOutcome::Finished(summary),
        None => TickOutcome::Inactive,
    }
}

/// Submits the score of a finished game. Only the first call on a given summary submits.
pub async fn finalize<BS>(leaderboard: &BS, game: &mut Game) -> Option<Summary>
where
    BS: LeaderboardRepo + ?Sized,
{
    let Game::GameOver(summary) = game else {
        return None;
    };
    if summary.finalized {
        return None;
    }
    summary.finalized = true;
    let submitted = leaderboard
        .submit(summary.difficulty, &summary.username, summary.score)
        .await;
    summary.submission = match submitted {
        Ok(outcome) => SubmissionStatus::from(outcome),
        Err(err) => {
            tracing::error!(
                username = %summary.username,
                difficulty = %summary.difficulty,
                score = summary.score,
                "Failed to submit the session score: {err}."
            );
            SubmissionStatus::Failed
        }
    };
    tracing::info!(
        task = "session_finalized",
        username = %summary.username,
        difficulty = %summary.difficulty,
        score = summary.score,
        correct = summary.correct,
        wrong = summary.wrong,
        skipped = summary.skipped,
        submission = ?summary.submission,
    );
    Some(summary.clone())
}
