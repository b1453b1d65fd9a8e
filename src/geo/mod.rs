use consts::EARTH_RADIUS_KM;
use models::LatLng;

pub mod consts;
pub mod handlers;
pub mod models;
pub mod requests;
pub mod responses;
#[cfg(test)]
mod tests;

/// Great-circle distance between two coordinates, in kilometres.
pub fn haversine_km(from: LatLng, to: LatLng) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` slightly above 1 for near-antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
