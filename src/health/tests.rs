use crate::health::responses::{HealthCheckResponse, LocationCounts};
use crate::http::tests::{passcode_header, test_server, PASSCODE_HEADER};
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let server = test_server();

    let response = server.get("/health/check").await;

    response.assert_status_ok();
    response.assert_json(&HealthCheckResponse {
        error: false,
        active_games: 0,
        locations: LocationCounts {
            easy: 2,
            medium: 1,
            hard: 0,
        },
    });
}

#[tokio::test]
async fn test_health_check_counts_games() {
    let server = test_server();
    server
        .post("/games")
        .add_header(PASSCODE_HEADER, passcode_header("keisha", true))
        .json(&json!({ "difficulty": "easy" }))
        .await
        .assert_status_ok();

    let response = server.get("/health/check").await;

    response.assert_status_ok();
    let health: HealthCheckResponse = response.json();
    assert_eq!(health.active_games, 1);
}
