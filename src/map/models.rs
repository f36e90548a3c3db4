use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Result of scoring a guess against the round's answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResult {
    pub km: f64,
    pub m: f64,
    /// Meters rounded to an integer below one kilometer, kilometers with one decimal otherwise.
    pub formatted: String,
}

impl DistanceResult {
    pub fn from_kilometers(km: f64) -> Self {
        let m = km * 1000.0;
        let formatted = if km >= 1.0 {
            format!("{km:.1}km")
        } else {
            format!("{}m", m.round() as u64)
        };
        Self { km, m, formatted }
    }
}
