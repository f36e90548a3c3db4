use crate::map::models::LatLng;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn contains(&self, position: LatLng) -> bool {
        (self.min_lat..=self.max_lat).contains(&position.lat)
            && (self.min_lng..=self.max_lng).contains(&position.lng)
    }

    /// Latitude and longitude are drawn independently and uniformly.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> LatLng {
        LatLng {
            lat: rng.gen_range(self.min_lat..self.max_lat),
            lng: rng.gen_range(self.min_lng..self.max_lng),
        }
    }
}
