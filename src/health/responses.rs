use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    pub error: bool,
    pub active_games: usize,
    pub locations: LocationCounts,
}

/// Size of each tier's location pool.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationCounts {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}
