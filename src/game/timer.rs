use crate::game::controller;
use crate::game::models::TickOutcome;
use crate::storage::games::HashMapGamesStorage;
use crate::storage::interface::LeaderboardRepo;
use chrono::Utc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Counts session `session_id` of game `game_id` down once per second until it runs out, or until
/// the game stops playing that session (exit, restart, removal).
pub fn spawn<BS>(
    games: HashMapGamesStorage,
    leaderboard: BS,
    game_id: String,
    session_id: String,
) where
    BS: LeaderboardRepo + Clone + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of an interval completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            let Some(game_handle) = games.get(&game_id).await else {
                tracing::debug!(%game_id, "Game removed, stopping its timer.");
                return;
            };
            let mut game_entry = game_handle.lock().await;
            let outcome = controller::tick(&leaderboard, &mut game_entry.game, &session_id).await;
            match outcome {
                TickOutcome::Running { time_left_secs } => {
                    tracing::trace!(%game_id, time_left_secs);
                }
                TickOutcome::Finished(summary) => {
                    game_entry.touched_at = Utc::now();
                    tracing::info!(
                        %game_id,
                        %session_id,
                        score = summary.score,
                        "Session timer ran out."
                    );
                    return;
                }
                TickOutcome::Inactive => return,
            }
        }
    });
}
