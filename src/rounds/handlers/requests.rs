use crate::map::models::LatLng;
use crate::panorama::PanoramaId;
use serde::Deserialize;

/// Where the panorama viewer actually placed `pano_id`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPositionRequest {
    pub pano_id: PanoramaId,
    pub lat: f64,
    pub lng: f64,
}

impl AnswerPositionRequest {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}
