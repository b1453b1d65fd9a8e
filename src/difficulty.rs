use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty tier. Each tier has its own success threshold, location pool and leaderboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Largest distance, in kilometres, at which a guess still scores.
    pub fn success_threshold_km(self) -> f64 {
        match self {
            Difficulty::Easy => 5.0,
            Difficulty::Medium => 2.5,
            Difficulty::Hard => 1.0,
        }
    }

    pub fn is_scored(self, distance_km: f64) -> bool {
        distance_km <= self.success_threshold_km()
    }

    pub fn has_hints(self) -> bool {
        self == Difficulty::Easy
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown difficulty `{0}`, expected easy, medium or hard")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == value)
            .ok_or_else(|| UnknownDifficulty(value.to_string()))
    }
}
