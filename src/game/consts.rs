pub const SESSION_TIME_BUDGET_SECS: u64 = 300;
/// Store calls per round before giving up on finding an unseen location.
pub const MAX_LOCATION_FETCH_ATTEMPTS: usize = 5;

pub const IDLE_GAME_SECS: u64 = 900;

pub const GAME_SWEEP_INTERVAL_SECS: u64 = 60;
