use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct StartGameRequest {
    /// `easy`, `medium` or `hard`.
    pub difficulty: String,
}
