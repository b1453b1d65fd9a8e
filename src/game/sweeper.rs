use crate::storage::games::HashMapGamesStorage;
use chrono::TimeDelta;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Every `period`, evicts games left in `Selecting` or `GameOver` for longer than `max_idle`.
pub fn spawn(games: HashMapGamesStorage, max_idle: TimeDelta, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval.tick().await;
        loop {
            interval.tick().await;
            let evicted = games.evict_idle(max_idle).await;
            if evicted > 0 {
                tracing::info!(task = "games_evicted", evicted, "Evicted idle games.");
            }
        }
    });
}
