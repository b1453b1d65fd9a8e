pub mod errors;
pub mod games;
pub mod interface;
pub mod leaderboard;
pub mod locations;
