pub const DEFAULT_LEADERBOARD_LIMIT: usize = 50;
pub const MAX_LEADERBOARD_LIMIT: usize = 100;
