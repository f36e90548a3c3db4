use crate::map::consts::SEOUL_CITY_HALL;
use crate::map::models::LatLng;
use crate::panorama::{CapabilityError, PanoramaLookup};
use crate::rounds::models::RoundAnswer;
use consts::{MAX_ATTEMPTS, PLACEHOLDER_PANORAMA_ID, SEARCH_RADIUS_M};
use models::BoundingBox;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Mutex, PoisonError};

pub mod consts;
pub mod models;
#[cfg(test)]
mod tests;

/// Picks round answers by rejection sampling inside a bounding box.
pub struct LocationSampler {
    bounds: BoundingBox,
    rng: Mutex<StdRng>,
}

impl LocationSampler {
    pub fn new(bounds: BoundingBox) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    pub fn with_rng(bounds: BoundingBox, rng: StdRng) -> Self {
        Self {
            bounds,
            rng: Mutex::new(rng),
        }
    }

    /// Always yields an answer unless the lookup itself fails. After [`MAX_ATTEMPTS`] random
    /// points without a panorama it settles on Seoul City Hall.
    pub async fn sample(&self, lookup: &dyn PanoramaLookup) -> Result<RoundAnswer, CapabilityError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let position = self.draw();
            let found = lookup
                .find_nearest_panorama(position, SEARCH_RADIUS_M)
                .await?;
            if let Some(pano_id) = found.filter(|pano_id| pano_id.is_usable()) {
                tracing::debug!(attempt, pano_id = pano_id.0, "Sampled a round location.");
                return Ok(RoundAnswer::new(position, pano_id));
            }
        }

        tracing::warn!(
            attempts = MAX_ATTEMPTS,
            "No panorama near any sampled point, falling back to Seoul City Hall."
        );
        let pano_id = lookup
            .find_nearest_panorama(SEOUL_CITY_HALL, SEARCH_RADIUS_M)
            .await?
            .unwrap_or(PLACEHOLDER_PANORAMA_ID);
        Ok(RoundAnswer::new(SEOUL_CITY_HALL, pano_id))
    }

    fn draw(&self) -> LatLng {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let position = self.bounds.random_point(&mut *rng);
        debug_assert!(self.bounds.contains(position));
        position
    }
}
