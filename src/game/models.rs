use crate::difficulty::Difficulty;
use crate::game::errors::GameError;
use crate::geo;
use crate::geo::models::LatLng;
use crate::leaderboard::models::SubmissionOutcome;
use crate::locations::models::Location;
use serde::{Deserialize, Serialize};

/// Everything a player can be doing: picking a tier, playing a timed session, or looking at the
/// result of the last one.
#[derive(Clone, Debug, Default)]
pub enum Game {
    #[default]
    Selecting,
    Playing(Session),
    GameOver(Summary),
}

impl Game {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Game::Playing(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Result<&mut Session, GameError> {
        match self {
            Game::Playing(session) => Ok(session),
            _ => Err(GameError::NotPlaying),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Round {
    AwaitingLocation,
    AwaitingGuess {
        location: Location,
        /// Can be moved around until the round is confirmed.
        guess: Option<LatLng>,
    },
    Revealed {
        location: Location,
        guess: LatLng,
        outcome: RoundOutcome,
    },
    /// Every location of the tier was already shown.
    NoContentRemaining,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    pub distance_km: f64,
    pub scored: bool,
}

/// One timed run of rounds on a single tier.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub username: String,
    pub difficulty: Difficulty,
    /// Number of scored rounds.
    pub score: u64,
    pub correct: u64,
    pub wrong: u64,
    pub skipped: u64,
    /// Identifiers of every location shown so far, oldest first.
    pub shown: Vec<String>,
    pub time_left_secs: u64,
    pub round: Round,
}

impl Session {
    pub fn new(username: String, difficulty: Difficulty, time_budget_secs: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            username,
            difficulty,
            score: 0,
            correct: 0,
            wrong: 0,
            skipped: 0,
            shown: Vec::new(),
            time_left_secs: time_budget_secs,
            round: Round::AwaitingLocation,
        }
    }

    /// Clears a finished round so that the next location can be fetched.
    pub fn prepare_next_round(&mut self) -> Result<(), GameError> {
        match self.round {
            Round::AwaitingGuess { .. } => Err(GameError::RoundInProgress),
            Round::AwaitingLocation | Round::Revealed { .. } | Round::NoContentRemaining => {
                self.round = Round::AwaitingLocation;
                Ok(())
            }
        }
    }

    pub fn begin_round(&mut self, location: Location) -> Result<(), GameError> {
        if !matches!(self.round, Round::AwaitingLocation) {
            return Err(GameError::RoundInProgress);
        }
        self.shown.push(location.id.clone());
        self.round = Round::AwaitingGuess {
            location,
            guess: None,
        };
        Ok(())
    }

    pub fn mark_exhausted(&mut self) {
        self.round = Round::NoContentRemaining;
    }

    pub fn place_guess(&mut self, new_guess: LatLng) -> Result<(), GameError> {
        if !new_guess.is_valid() {
            return Err(GameError::InvalidCoordinates);
        }
        match &mut self.round {
            Round::AwaitingGuess { guess, .. } => {
                *guess = Some(new_guess);
                Ok(())
            }
            Round::Revealed { .. } => Err(GameError::AlreadyConfirmed),
            Round::AwaitingLocation | Round::NoContentRemaining => {
                Err(GameError::NoRoundInProgress)
            }
        }
    }

    pub fn confirm(&mut self) -> Result<RoundOutcome, GameError> {
        let (location, guess) = match &self.round {
            Round::AwaitingGuess {
                location,
                guess: Some(guess),
            } => (location.clone(), *guess),
            Round::AwaitingGuess { guess: None, .. } => return Err(GameError::NoGuessPlaced),
            Round::Revealed { .. } => return Err(GameError::AlreadyConfirmed),
            Round::AwaitingLocation | Round::NoContentRemaining => {
                return Err(GameError::NoRoundInProgress)
            }
        };
        let distance_km = geo::haversine_km(guess, location.coordinates);
        let scored = self.difficulty.is_scored(distance_km);
        if scored {
            self.correct += 1;
            self.score += 1;
        } else {
            self.wrong += 1;
        }
        let outcome = RoundOutcome {
            distance_km,
            scored,
        };
        self.round = Round::Revealed {
            location,
            guess,
            outcome,
        };
        Ok(outcome)
    }

    /// Drops the current round unscored and unrevealed.
    pub fn skip(&mut self) -> Result<(), GameError> {
        match self.round {
            Round::AwaitingGuess { .. } => {
                self.skipped += 1;
                self.round = Round::AwaitingLocation;
                Ok(())
            }
            Round::Revealed { .. } => Err(GameError::AlreadyConfirmed),
            Round::AwaitingLocation | Round::NoContentRemaining => {
                Err(GameError::NoRoundInProgress)
            }
        }
    }

    /// Returns the seconds left after this tick.
    pub fn tick(&mut self) -> u64 {
        self.time_left_secs = self.time_left_secs.saturating_sub(1);
        self.time_left_secs
    }

    pub fn summary(&self) -> Summary {
        Summary {
            session_id: self.id.clone(),
            username: self.username.clone(),
            difficulty: self.difficulty,
            score: self.score,
            correct: self.correct,
            wrong: self.wrong,
            skipped: self.skipped,
            finalized: false,
            submission: SubmissionStatus::Pending,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub session_id: String,
    pub username: String,
    pub difficulty: Difficulty,
    pub score: u64,
    pub correct: u64,
    pub wrong: u64,
    pub skipped: u64,
    /// Set once the score submission was attempted; it is never attempted twice.
    pub finalized: bool,
    pub submission: SubmissionStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionStatus {
    Pending,
    Created,
    Updated,
    NoUpdateNeeded,
    Failed,
}

impl From<SubmissionOutcome> for SubmissionStatus {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Created => SubmissionStatus::Created,
            SubmissionOutcome::Updated => SubmissionStatus::Updated,
            SubmissionOutcome::NoUpdateNeeded => SubmissionStatus::NoUpdateNeeded,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    Running { time_left_secs: u64 },
    /// The timer ran out on this tick and the score submission was attempted.
    Finished(Summary),
    /// The game no longer holds the ticking session.
    Inactive,
}
