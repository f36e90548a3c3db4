use consts::EARTH_RADIUS_KM;
use models::{DistanceResult, LatLng};

pub mod consts;
pub mod models;
#[cfg(test)]
mod tests;

/// Great-circle distance in kilometers on a spherical Earth.
pub fn haversine_km(from: LatLng, to: LatLng) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    // Rounding can push `a` just past 1 for nearly antipodal points.
    let a = ((delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2))
    .min(1.0);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS_KM * c
}

pub fn calculate_distance(answer: LatLng, guess: LatLng) -> DistanceResult {
    DistanceResult::from_kilometers(haversine_km(answer, guess))
}
