use crate::map::haversine_km;
use crate::map::models::LatLng;
use crate::panorama::{CapabilityError, PanoramaId, PanoramaLookup};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry {
    pano_id: PanoramaId,
    lat: f64,
    lng: f64,
}

impl CatalogEntry {
    fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Known panoramas read from an NDJSON file, one `{"panoId": .., "lat": .., "lng": ..}` per line.
#[derive(Debug)]
pub struct PanoramaCatalog {
    entries: Vec<CatalogEntry>,
}

impl PanoramaCatalog {
    pub async fn load(path: &Path) -> Result<Self, CapabilityError> {
        let contents = tokio::fs::read_to_string(path).await.map_err(|err| {
            CapabilityError::Load(format!("cannot read `{}`: {err}", path.display()))
        })?;
        let catalog = Self::parse(&contents)?;
        tracing::info!(
            panoramas = catalog.len(),
            "Loaded the panorama catalog from `{}`.",
            path.display(),
        );
        Ok(catalog)
    }

    pub fn parse(contents: &str) -> Result<Self, CapabilityError> {
        let mut entries = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let entry: CatalogEntry = serde_json::from_str(line)
                .map_err(|err| CapabilityError::Load(format!("line {}: {err}", index + 1)))?;
            entries.push(entry);
        }
        if entries.is_empty() {
            return Err(CapabilityError::Load(String::from(
                "the catalog contains no panoramas",
            )));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[async_trait]
impl PanoramaLookup for PanoramaCatalog {
    async fn find_nearest_panorama(
        &self,
        position: LatLng,
        radius_m: u32,
    ) -> Result<Option<PanoramaId>, CapabilityError> {
        if !position.lat.is_finite() || !position.lng.is_finite() {
            return Err(CapabilityError::Lookup(format!(
                "invalid position ({}, {})",
                position.lat, position.lng
            )));
        }
        let radius_km = f64::from(radius_m) / 1000.0;
        let nearest = self
            .entries
            .iter()
            .map(|entry| (entry.pano_id, haversine_km(position, entry.position())))
            .filter(|(_, distance_km)| *distance_km <= radius_km)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(pano_id, _)| pano_id);
        Ok(nearest)
    }
}
