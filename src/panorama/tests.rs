use crate::map::consts::SEOUL_CITY_HALL;
use crate::map::models::LatLng;
use crate::panorama::catalog::PanoramaCatalog;
use crate::panorama::loader::CapabilityLoader;
use crate::panorama::{CapabilityError, PanoramaId, PanoramaLookup};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const CATALOG: &str = r#"
{"panoId": 1170915, "lat": 37.5663, "lng": 126.9779}
{"panoId": 1170916, "lat": 37.5670, "lng": 126.9785}

{"panoId": 1032450, "lat": 35.1796, "lng": 129.0756}
"#;

#[test]
fn test_catalog_skips_blank_lines() {
    let catalog = PanoramaCatalog::parse(CATALOG).expect("Failed to parse the test catalog.");
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_catalog_reports_malformed_line() {
    let err = PanoramaCatalog::parse("{\"panoId\": 1, \"lat\": 1.0, \"lng\": 2.0}\nnot json\n")
        .expect_err("A malformed line must fail the load.");
    match err {
        CapabilityError::Load(message) => assert!(message.starts_with("line 2:"), "{message}"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn test_empty_catalog_is_rejected() {
    assert!(matches!(
        PanoramaCatalog::parse("\n\n"),
        Err(CapabilityError::Load(_))
    ));
}

#[tokio::test]
async fn test_missing_catalog_file_fails_to_load() {
    let result = PanoramaCatalog::load("/definitely/not/here.ndjson".as_ref()).await;
    assert!(matches!(result, Err(CapabilityError::Load(_))));
}

#[tokio::test]
async fn test_catalog_finds_nearest_panorama_within_radius() {
    let catalog = PanoramaCatalog::parse(CATALOG).expect("Failed to parse the test catalog.");

    let nearest = catalog
        .find_nearest_panorama(SEOUL_CITY_HALL, 500)
        .await
        .expect("Catalog lookups never fail.");
    assert_eq!(nearest, Some(PanoramaId(1170915)));

    // Daejeon has no panorama in the test catalog.
    let nothing = catalog
        .find_nearest_panorama(LatLng::new(36.3504, 127.3845), 500)
        .await
        .expect("Catalog lookups never fail.");
    assert_eq!(nothing, None);
}

#[tokio::test]
async fn test_catalog_respects_radius() {
    let catalog = PanoramaCatalog::parse(CATALOG).expect("Failed to parse the test catalog.");
    // Roughly 1.1 km south of the closest Seoul entry.
    let position = LatLng::new(37.5563, 126.9779);

    let within_500_m = catalog
        .find_nearest_panorama(position, 500)
        .await
        .expect("Catalog lookups never fail.");
    let within_2_km = catalog
        .find_nearest_panorama(position, 2_000)
        .await
        .expect("Catalog lookups never fail.");

    assert_eq!(within_500_m, None);
    assert_eq!(within_2_km, Some(PanoramaId(1170915)));
}

#[tokio::test]
async fn test_catalog_rejects_non_finite_positions() {
    let catalog = PanoramaCatalog::parse(CATALOG).expect("Failed to parse the test catalog.");

    let result = catalog
        .find_nearest_panorama(LatLng::new(f64::NAN, 126.9779), 500)
        .await;

    assert!(matches!(result, Err(CapabilityError::Lookup(_))));
}

#[test]
fn test_only_positive_ids_are_usable() {
    assert!(PanoramaId(1).is_usable());
    assert!(!PanoramaId(0).is_usable());
}

fn counting_loader(
    loads: Arc<AtomicUsize>,
    failures_before_success: usize,
) -> CapabilityLoader<PanoramaCatalog> {
    CapabilityLoader::new(move || {
        let loads = Arc::clone(&loads);
        async move {
            let attempt = loads.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            if attempt < failures_before_success {
                return Err(CapabilityError::Load(String::from("script error")));
            }
            PanoramaCatalog::parse(CATALOG).map(Arc::new)
        }
    })
}

#[tokio::test]
async fn test_concurrent_callers_share_one_load() {
    let loads = Arc::new(AtomicUsize::new(0));
    let loader = counting_loader(Arc::clone(&loads), 0);

    let (first, second, third) = tokio::join!(loader.ready(), loader.ready(), loader.ready());

    assert!(first.is_ok() && second.is_ok() && third.is_ok());
    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert!(loader.is_ready());

    loader.ready().await.expect("A ready loader keeps its capability.");
    assert_eq!(loads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failed_load_is_not_cached() {
    let loads = Arc::new(AtomicUsize::new(0));
    let loader = counting_loader(Arc::clone(&loads), 1);

    let first = loader.ready().await;
    assert_eq!(
        first.err(),
        Some(CapabilityError::Load(String::from("script error")))
    );
    assert!(!loader.is_ready());

    loader.ready().await.expect("The retry should load the capability.");
    assert_eq!(loads.load(Ordering::SeqCst), 2);
    assert!(loader.is_ready());
}

#[tokio::test]
async fn test_clones_share_the_loaded_capability() {
    let loads = Arc::new(AtomicUsize::new(0));
    let loader = counting_loader(Arc::clone(&loads), 0);
    let clone = loader.clone();

    let original = loader.ready().await.expect("Load should succeed.");
    let cloned = clone.ready().await.expect("Load should succeed.");

    assert!(Arc::ptr_eq(&original, &cloned));
    assert_eq!(loads.load(Ordering::SeqCst), 1);
}
