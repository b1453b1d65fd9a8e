use crate::game::models::Game;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

pub struct GameEntry {
    pub owner: String,
    pub game: Game,
    /// Last player action or timer expiry.
    pub touched_at: DateTime<Utc>,
}

/// Events of one game are serialized by its mutex; different games never contend.
pub type GameHandle = Arc<Mutex<GameEntry>>;

#[derive(Clone, Default)]
pub struct HashMapGamesStorage {
    storage: Arc<RwLock<HashMap<String, GameHandle>>>,
}

impl HashMapGamesStorage {
    pub async fn insert(&self, owner: String, game: Game) -> String {
        let game_id = uuid::Uuid::new_v4().to_string();
        let entry = Arc::new(Mutex::new(GameEntry {
            owner,
            game,
            touched_at: Utc::now(),
        }));
        self.storage.write().await.insert(game_id.clone(), entry);
        game_id
    }

    pub async fn get(&self, game_id: &str) -> Option<GameHandle> {
        self.storage.read().await.get(game_id).cloned()
    }

    pub async fn remove(&self, game_id: &str) -> bool {
        self.storage.write().await.remove(game_id).is_some()
    }

    pub async fn count(&self) -> usize {
        self.storage.read().await.len()
    }

    /// Drops games that are not being played and were not touched for `max_idle`.
    /// Games locked by a request or a timer are left for the next sweep.
    pub async fn evict_idle(&self, max_idle: TimeDelta) -> usize {
        let cutoff = Utc::now() - max_idle;
        let mut storage_guard = self.storage.write().await;
        let before = storage_guard.len();
        storage_guard.retain(|_, game_handle| match game_handle.try_lock() {
            Ok(game_entry) => {
                matches!(game_entry.game, Game::Playing(_)) || game_entry.touched_at > cutoff
            }
            Err(_) => true,
        });
        before - storage_guard.len()
    }
}
