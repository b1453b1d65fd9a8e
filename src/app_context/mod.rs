use crate::auth::models::AuthContext;
use crate::cli::Args;
use crate::difficulty::Difficulty;
use crate::locations;
use crate::storage::games::HashMapGamesStorage;
use crate::storage::leaderboard::HashMapLeaderboardStorage;
use crate::storage::locations::HashMapLocationsStorage;
use anyhow::Context;

#[derive(Clone)]
pub struct AppContext<LS, BS> {
    pub locations: LS,
    pub leaderboard: BS,
    pub games: HashMapGamesStorage,
    pub session_duration_secs: u64,
}

pub type DefaultAppContext = AppContext<HashMapLocationsStorage, HashMapLeaderboardStorage>;

pub struct RequestContext {
    pub player: AuthContext,
    pub game_id: String,
}

pub fn init(args: &Args) -> anyhow::Result<DefaultAppContext> {
    let catalog = locations::load_catalog(&args.locations).with_context(|| {
        format!(
            "Failed to load locations from {}.",
            args.locations.display()
        )
    })?;
    for difficulty in Difficulty::ALL {
        let count = catalog
            .iter()
            .filter(|location| location.difficulty == difficulty)
            .count();
        if count == 0 {
            tracing::warn!(%difficulty, "No locations available for the tier.");
        } else {
            tracing::info!(%difficulty, count, "Loaded locations.");
        }
    }
    Ok(AppContext {
        locations: HashMapLocationsStorage::from_locations(catalog),
        leaderboard: HashMapLeaderboardStorage::default(),
        games: HashMapGamesStorage::default(),
        session_duration_secs: args.session_duration_secs,
    })
}
