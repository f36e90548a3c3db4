use crate::map::consts::SEOUL_CITY_HALL;
use crate::map::models::LatLng;
use crate::panorama::{CapabilityError, PanoramaId, PanoramaLookup};
use crate::sampler::consts::{KOREA_BOUNDS, MAX_ATTEMPTS, PLACEHOLDER_PANORAMA_ID, SEARCH_RADIUS_M};
use crate::sampler::LocationSampler;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;

/// Answers queries from a script and records every query it receives.
struct ScriptedLookup {
    answer: Box<dyn Fn(usize, LatLng) -> Result<Option<PanoramaId>, CapabilityError> + Send + Sync>,
    queries: Mutex<Vec<(LatLng, u32)>>,
}

impl ScriptedLookup {
    fn new(
        answer: impl Fn(usize, LatLng) -> Result<Option<PanoramaId>, CapabilityError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            answer: Box::new(answer),
            queries: Mutex::new(Vec::new()),
        }
    }

    fn queries(&self) -> Vec<(LatLng, u32)> {
        self.queries.lock().expect("Poisoned query log.").clone()
    }
}

#[async_trait]
impl PanoramaLookup for ScriptedLookup {
    async fn find_nearest_panorama(
        &self,
        position: LatLng,
        radius_m: u32,
    ) -> Result<Option<PanoramaId>, CapabilityError> {
        let mut queries = self.queries.lock().expect("Poisoned query log.");
        let call = queries.len();
        queries.push((position, radius_m));
        (self.answer)(call, position)
    }
}

fn seeded_sampler(seed: u64) -> LocationSampler {
    LocationSampler::with_rng(KOREA_BOUNDS, StdRng::seed_from_u64(seed))
}

#[tokio::test]
async fn test_first_hit_is_accepted() {
    let lookup = ScriptedLookup::new(|_, _| Ok(Some(PanoramaId(42))));

    let answer = seeded_sampler(1)
        .sample(&lookup)
        .await
        .expect("Sampling should succeed.");

    let queries = lookup.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(answer.pano_id, PanoramaId(42));
    assert!(KOREA_BOUNDS.contains(answer.position()));
    assert_eq!(queries[0], (answer.position(), SEARCH_RADIUS_M));
}

#[tokio::test]
async fn test_falls_back_after_max_attempts() {
    let lookup = ScriptedLookup::new(|_, position| {
        if position == SEOUL_CITY_HALL {
            Ok(Some(PanoramaId(1170915)))
        } else {
            Ok(None)
        }
    });

    let answer = seeded_sampler(2)
        .sample(&lookup)
        .await
        .expect("Sampling should succeed.");

    let queries = lookup.queries();
    assert_eq!(queries.len(), MAX_ATTEMPTS + 1);
    assert!(queries[..MAX_ATTEMPTS]
        .iter()
        .all(|(position, radius)| KOREA_BOUNDS.contains(*position) && *radius == SEARCH_RADIUS_M));
    assert_eq!(queries[MAX_ATTEMPTS], (SEOUL_CITY_HALL, SEARCH_RADIUS_M));
    assert_eq!(answer.position(), SEOUL_CITY_HALL);
    assert_eq!(answer.pano_id, PanoramaId(1170915));
}

#[tokio::test]
async fn test_placeholder_id_when_fallback_finds_nothing() {
    let lookup = ScriptedLookup::new(|_, _| Ok(None));

    let answer = seeded_sampler(3)
        .sample(&lookup)
        .await
        .expect("Sampling should succeed.");

    assert_eq!(lookup.queries().len(), MAX_ATTEMPTS + 1);
    assert_eq!(answer.position(), SEOUL_CITY_HALL);
    assert_eq!(answer.pano_id, PLACEHOLDER_PANORAMA_ID);
}

#[tokio::test]
async fn test_non_positive_ids_are_rejected() {
    let lookup = ScriptedLookup::new(|call, _| match call {
        0 | 1 => Ok(Some(PanoramaId(0))),
        _ => Ok(Some(PanoramaId(7))),
    });

    let answer = seeded_sampler(4)
        .sample(&lookup)
        .await
        .expect("Sampling should succeed.");

    assert_eq!(lookup.queries().len(), 3);
    assert_eq!(answer.pano_id, PanoramaId(7));
}

#[tokio::test]
async fn test_lookup_failure_propagates_without_retrying() {
    let lookup = ScriptedLookup::new(|_, _| Err(CapabilityError::Lookup(String::from("offline"))));

    let result = seeded_sampler(5).sample(&lookup).await;

    assert_eq!(
        result,
        Err(CapabilityError::Lookup(String::from("offline")))
    );
    assert_eq!(lookup.queries().len(), 1);
}

#[test]
fn test_random_points_stay_inside_the_box() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..10_000 {
        assert!(KOREA_BOUNDS.contains(KOREA_BOUNDS.random_point(&mut rng)));
    }
}
