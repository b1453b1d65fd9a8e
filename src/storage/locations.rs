use crate::difficulty::Difficulty;
use crate::locations::models::Location;
use crate::storage::errors::StoreError;
use crate::storage::interface::LocationRepo;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct HashMapLocationsStorage {
    storage: Arc<RwLock<HashMap<Difficulty, Vec<Location>>>>,
}

impl HashMapLocationsStorage {
    pub fn from_locations(locations: Vec<Location>) -> Self {
        let mut by_difficulty: HashMap<Difficulty, Vec<Location>> = HashMap::new();
        for location in locations {
            by_difficulty
                .entry(location.difficulty)
                .or_default()
                .push(location);
        }
        Self {
            storage: Arc::new(RwLock::new(by_difficulty)),
        }
    }

    pub async fn count(&self, difficulty: Difficulty) -> usize {
        self.storage
            .read()
            .await
            .get(&difficulty)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl LocationRepo for HashMapLocationsStorage {
    async fn random(
        &self,
        difficulty: Difficulty,
        exclude: &[String],
    ) -> Result<Option<Location>, StoreError> {
        let storage_guard = self.storage.read().await;
        let candidates = storage_guard
            .get(&difficulty)
            .map(|locations| {
                locations
                    .iter()
                    .filter(|location| !exclude.contains(&location.id))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        Ok(candidates
            .choose(&mut rand::thread_rng())
            .map(|location| (*location).clone()))
    }
}
