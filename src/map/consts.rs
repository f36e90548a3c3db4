use crate::map::models::LatLng;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Seoul City Hall. Used as the sampler's last resort and as the guess of a player who let the
/// countdown run out without clicking the map.
pub const SEOUL_CITY_HALL: LatLng = LatLng::new(37.5665, 126.978);
