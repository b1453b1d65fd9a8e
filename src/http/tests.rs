use crate::app_context::{AppContext, DefaultAppContext};
use crate::auth;
use crate::auth::tests::passcode_for;
use crate::cli::tests::fake_args;
use crate::difficulty::Difficulty;
use crate::geo::models::LatLng;
use crate::http::router;
use crate::locations::models::Location;
use crate::storage::errors::StoreError;
use crate::storage::games::HashMapGamesStorage;
use crate::storage::interface::LocationRepo;
use crate::storage::leaderboard::HashMapLeaderboardStorage;
use crate::storage::locations::HashMapLocationsStorage;
use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const PASSCODE_HEADER: HeaderName = HeaderName::from_static("passcode");

pub fn passcode_header(username: &str, verified: bool) -> HeaderValue {
    HeaderValue::from_str(&passcode_for(username, verified))
        .expect("Test passcode is not a header value.")
}

pub fn test_location(id: &str, difficulty: Difficulty, coordinates: LatLng) -> Location {
    Location {
        id: id.to_string(),
        name: format!("Location {id}"),
        info: String::from("A spot somewhere in Trinidad and Tobago."),
        image_url: format!("https://images.trinigeo.example/{id}.jpg"),
        coordinates,
        hint: difficulty
            .has_hints()
            .then(|| String::from("Look for the steelpan yard.")),
        difficulty,
    }
}

/// Two easy locations, one medium and none for hard.
pub fn test_locations() -> Vec<Location> {
    vec![
        test_location(
            "queens-park-savannah",
            Difficulty::Easy,
            LatLng::new(10.6699, -61.5137),
        ),
        test_location(
            "maracas-bay",
            Difficulty::Easy,
            LatLng::new(10.7580, -61.4350),
        ),
        test_location(
            "pitch-lake",
            Difficulty::Medium,
            LatLng::new(10.2316, -61.6283),
        ),
    ]
}

pub fn test_app_context(locations: Vec<Location>) -> DefaultAppContext {
    AppContext {
        locations: HashMapLocationsStorage::from_locations(locations),
        leaderboard: HashMapLeaderboardStorage::default(),
        games: HashMapGamesStorage::default(),
        session_duration_secs: fake_args().session_duration_secs,
    }
}

pub fn test_server() -> TestServer {
    test_server_with(test_app_context(test_locations()))
}

pub fn test_server_with(app_context: DefaultAppContext) -> TestServer {
    let args = fake_args();
    auth::init(&args);
    let router = router::new(&args, app_context);
    TestServer::new(router).expect("Failed to run test server.")
}

/// Ignores exclusions and keeps handing out the same location.
pub struct StubbornLocations {
    pub location: Location,
    pub calls: AtomicUsize,
}

#[async_trait]
impl LocationRepo for StubbornLocations {
    async fn random(
        &self,
        _difficulty: Difficulty,
        _exclude: &[String],
    ) -> Result<Option<Location>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(self.location.clone()))
    }
}

#[derive(Clone)]
pub struct BrokenLocations;

#[async_trait]
impl LocationRepo for BrokenLocations {
    async fn random(
        &self,
        _difficulty: Difficulty,
        _exclude: &[String],
    ) -> Result<Option<Location>, StoreError> {
        Err(StoreError::Unavailable(String::from("timeout")))
    }
}
