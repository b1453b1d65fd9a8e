use crate::geo::haversine_km;
use crate::geo::models::LatLng;
use crate::geo::responses::{DistanceError, DistanceErrorResponse, DistanceResponse};
use crate::http::tests::{passcode_header, test_server, PASSCODE_HEADER};
use axum::http::StatusCode;
use serde_json::json;

const PORT_OF_SPAIN: LatLng = LatLng {
    lat: 10.6549,
    lng: -61.5019,
};
const SAN_FERNANDO: LatLng = LatLng {
    lat: 10.2799,
    lng: -61.4589,
};

#[test]
fn test_same_point_is_zero() {
    let point = LatLng::new(10.6, -61.4);
    assert_eq!(haversine_km(point, point), 0.0);
}

#[test]
fn test_distance_is_symmetric() {
    let there = haversine_km(PORT_OF_SPAIN, SAN_FERNANDO);
    let back = haversine_km(SAN_FERNANDO, PORT_OF_SPAIN);
    assert!((there - back).abs() < 1e-9);
}

#[test]
fn test_port_of_spain_to_san_fernando() {
    let distance = haversine_km(PORT_OF_SPAIN, SAN_FERNANDO);
    assert!((41.5..42.5).contains(&distance), "got {distance}");
}

#[test]
fn test_one_degree_of_latitude() {
    let distance = haversine_km(LatLng::new(10.0, -61.0), LatLng::new(11.0, -61.0));
    assert!((distance - 111.195).abs() < 0.01, "got {distance}");
}

#[test]
fn test_antipodes_are_half_the_circumference() {
    let distance = haversine_km(LatLng::new(0.0, 0.0), LatLng::new(0.0, 180.0));
    assert!((distance - std::f64::consts::PI * 6371.0).abs() < 1e-6);
}

#[test]
fn test_coordinate_ranges() {
    assert!(LatLng::new(90.0, -180.0).is_valid());
    assert!(!LatLng::new(90.5, 0.0).is_valid());
    assert!(!LatLng::new(0.0, 180.5).is_valid());
    assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
    assert!(!LatLng::new(0.0, f64::NAN).is_valid());
    assert!(!LatLng::new(f64::INFINITY, 0.0).is_valid());
    assert!(!LatLng::new(0.0, f64::NEG_INFINITY).is_valid());
}

#[tokio::test]
async fn test_distance_endpoint() {
    let server = test_server();

    let response = server
        .post("/distance")
        .add_header(PASSCODE_HEADER, passcode_header("keisha", true))
        .json(&json!({
            "guess": { "lat": 10.6, "lng": -61.4 },
            "actual": { "lat": 10.6, "lng": -61.4 },
        }))
        .await;

    response.assert_status_ok();
    response.assert_json(&DistanceResponse {
        error: false,
        distance: 0.0,
    });
}

#[tokio::test]
async fn test_distance_endpoint_without_coordinates() {
    let server = test_server();

    let response = server
        .post("/distance")
        .add_header(PASSCODE_HEADER, passcode_header("keisha", true))
        .json(&json!({ "guess": { "lat": 10.6, "lng": -61.4 } }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&DistanceErrorResponse {
        error: true,
        error_code: DistanceError::MissingCoordinates,
    });
}

#[tokio::test]
async fn test_distance_endpoint_with_out_of_range_coordinates() {
    let server = test_server();

    let response = server
        .post("/distance")
        .add_header(PASSCODE_HEADER, passcode_header("keisha", true))
        .json(&json!({
            "guess": { "lat": 91.0, "lng": -61.4 },
            "actual": { "lat": 10.6, "lng": -61.4 },
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&DistanceErrorResponse {
        error: true,
        error_code: DistanceError::InvalidCoordinates,
    });
}

#[tokio::test]
async fn test_distance_endpoint_requires_passcode() {
    let server = test_server();

    let response = server
        .post("/distance")
        .json(&json!({
            "guess": { "lat": 10.6, "lng": -61.4 },
            "actual": { "lat": 10.6, "lng": -61.4 },
        }))
        .await;

    response.assert_status_unauthorized();
}
