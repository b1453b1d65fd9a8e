use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResponse {
    pub error: bool,
    /// Kilometres.
    pub distance: f64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceErrorResponse {
    pub error: bool,
    pub error_code: DistanceError,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistanceError {
    MissingCoordinates,
    InvalidCoordinates,
}

impl IntoResponse for DistanceError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(DistanceErrorResponse {
                error: true,
                error_code: self,
            }),
        )
            .into_response()
    }
}
