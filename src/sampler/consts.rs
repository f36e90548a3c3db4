use crate::panorama::PanoramaId;
use crate::sampler::models::BoundingBox;

/// Mainland Korea plus Jeju. Islands outside the box are never sampled.
pub const KOREA_BOUNDS: BoundingBox = BoundingBox {
    min_lat: 33.1,
    max_lat: 38.6,
    min_lng: 125.0,
    max_lng: 129.6,
};

pub const SEARCH_RADIUS_M: u32 = 500;
pub const MAX_ATTEMPTS: usize = 15;
pub const PLACEHOLDER_PANORAMA_ID: PanoramaId = PanoramaId(1);
