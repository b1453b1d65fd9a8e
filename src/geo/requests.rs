use crate::geo::models::LatLng;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DistanceRequest {
    pub guess: Option<LatLng>,
    pub actual: Option<LatLng>,
}
