use crate::difficulty::Difficulty;
use crate::locations::models::Location;
use crate::storage::errors::StoreError;
use crate::storage::interface::LocationRepo;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no unseen locations left")]
    Exhausted,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Asks the store for a location outside `exclude`, re-asking when the store hands back one that
/// was already shown. Gives up with [`FetchError::Exhausted`] after `max_attempts` store calls.
pub async fn fetch_unique<LS>(
    store: &LS,
    difficulty: Difficulty,
    exclude: &[String],
    max_attempts: usize,
) -> Result<Location, FetchError>
where
    LS: LocationRepo + ?Sized,
{
    for attempt in 1..=max_attempts {
        match store.random(difficulty, exclude).await? {
            None => return Err(FetchError::Exhausted),
            Some(location) if exclude.contains(&location.id) => {
                tracing::debug!(
                    attempt,
                    location_id = %location.id,
                    "Store returned an already shown location, fetching again."
                );
            }
            Some(location) => return Ok(location),
        }
    }
    Err(FetchError::Exhausted)
}
