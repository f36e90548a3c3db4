//! The street-level imagery capability the game depends on. Rounds only ever talk to it through
//! [`PanoramaLookup`], obtained from a [`loader::CapabilityLoader`].

use crate::cli::Args;
use crate::map::models::LatLng;
use crate::panorama::catalog::PanoramaCatalog;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

pub mod catalog;
pub mod loader;
#[cfg(test)]
mod tests;

/// Opaque handle of a captured viewpoint. Only positive ids resolve to a viewable panorama.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanoramaId(pub u64);

impl PanoramaId {
    pub fn is_usable(self) -> bool {
        self.0 > 0
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum CapabilityError {
    #[error("Failed to load the panorama service: {0}")]
    Load(String),
    #[error("Panorama lookup failed: {0}")]
    Lookup(String),
}

#[async_trait]
pub trait PanoramaLookup: Send + Sync {
    /// Closest panorama within `radius_m` meters of `position`, if any.
    async fn find_nearest_panorama(
        &self,
        position: LatLng,
        radius_m: u32,
    ) -> Result<Option<PanoramaId>, CapabilityError>;
}

pub type PanoramaLoader = loader::CapabilityLoader<dyn PanoramaLookup>;

/// Lazily loads the panorama catalog the first time a round needs it.
pub fn init(args: &Args) -> PanoramaLoader {
    let path = Arc::new(args.panoramas.clone());
    PanoramaLoader::new(move || {
        let path = Arc::clone(&path);
        async move {
            PanoramaCatalog::load(&path)
                .await
                .map(|catalog| Arc::new(catalog) as Arc<dyn PanoramaLookup>)
        }
    })
}
