use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct LeaderboardQueryParams {
    pub mode: Option<String>,
    pub limit: Option<usize>,
}
